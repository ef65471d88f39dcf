//! Solwright: composable smart contract generation.
//!
//! Feature modules accumulate building blocks (parents, functions,
//! modifiers, constructor arguments, declarations, state) into a
//! [`ContractModel`]; the emitter then renders one Solidity source file.
//!
//! # Example
//!
//! ```
//! use solwright_core::Catalog;
//! use solwright_lib::features::{Erc20Options, GenericOptions, generate};
//!
//! let opts = Erc20Options {
//!     name: "MyToken".into(),
//!     symbol: "MTK".into(),
//!     burnable: true,
//!     ..Erc20Options::default()
//! };
//! let source = generate(&GenericOptions::Erc20(opts), Catalog::builtin()).unwrap();
//! assert!(source.contains("contract MyToken is ERC20, ERC20Burnable, ERC20Permit {"));
//! ```
//!
//! Modules:
//! - `model` - the build-session aggregate and its components
//! - `emit` - Solidity rendering
//! - `features` - options-driven feature modules

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod features;
pub mod model;

pub use emit::{Config, render};
pub use model::{
    ConstructorArg, ContractModel, Declaration, FunctionArg, FunctionDef, FunctionId,
    FunctionKind, Mutability, Owner, ParentArg, ParentReference, StateVariable, SymbolKind,
    Visibility,
};

/// Errors raised while building or emitting a contract model.
///
/// Every variant is a build-time error local to one session: the failed
/// model is discarded and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A name was registered twice with different content.
    #[error("conflicting definitions for `{key}`: `{existing}` vs `{requested}`")]
    SymbolConflict {
        key: String,
        existing: String,
        requested: String,
    },

    /// A function body was set after the function was already finalized.
    #[error("function `{function}` already has a body")]
    DuplicateBody { function: String },

    /// Two owners contributed a constructor argument with the same name.
    #[error("constructor argument `{name}` contributed by {existing} and {requested}")]
    ArgumentNameCollision {
        name: String,
        existing: String,
        requested: String,
    },

    /// The model was mutated after it was emitted.
    #[error("contract model is frozen after emission")]
    ModelFrozen,

    /// An enumerated option received a value outside its variant set.
    #[error("unknown {kind} value: `{value}`")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// A storage access referenced a variable that was never declared.
    #[error("unknown state variable: `{name}`")]
    UnknownStateVariable { name: String },

    /// A feature asked the catalog for a contract it does not know.
    #[error("unknown base contract: `{name}`")]
    UnknownBaseContract { name: String },

    /// User-provided text does not yield a usable identifier.
    #[error("`{input}` is not a valid identifier")]
    InvalidIdentifier { input: String },

    /// An option value failed validation.
    #[error("invalid value for {option}: `{value}`")]
    InvalidOption { option: &'static str, value: String },
}

/// Result type for model and feature operations.
pub type Result<T> = std::result::Result<T, Error>;
