//! Solidity emission from a built contract model.
//!
//! One deterministic pass, in this order:
//! - license and pragma
//! - imports (upgradeable builds swap in upgradeable variants)
//! - contract natspec and inheritance clause
//! - constants, errors and events
//! - plain state variables or namespaced storage records
//! - constructor (and initializer for upgradeable builds)
//! - functions, with accumulated modifiers and sorted override clauses

mod config;
mod emitter;
mod render;
mod transform;

#[cfg(test)]
mod transform_tests;

pub use config::Config;
pub use emitter::Emitter;

use crate::model::ContractModel;

/// Render `model` as Solidity source. Never mutates the model.
pub fn render(model: &ContractModel, config: &Config) -> String {
    Emitter::new(model, config).emit()
}
