//! Options-driven feature modules.
//!
//! Each contract kind builds a [`ContractModel`] by applying features in a
//! fixed order: kind-specific features first, then access control,
//! pausability, upgradeability, and finally info. Features that restrict a
//! function must run after the function exists and before upgradeability,
//! which may add its own restricted function.

pub mod access;
pub mod custom;
pub mod erc20;
pub mod erc721;
pub mod info;
pub mod pausable;
pub mod upgradeable;

#[cfg(test)]
mod access_tests;
#[cfg(test)]
mod erc20_tests;

pub use access::Access;
pub use custom::CustomOptions;
pub use erc20::Erc20Options;
pub use erc721::Erc721Options;
pub use info::Info;
pub use upgradeable::Upgradeable;

use solwright_core::Catalog;
use solwright_core::utils::to_identifier;

use crate::emit::Config;
use crate::model::{ContractModel, FunctionDef, FunctionId, ParentReference};
use crate::{Error, Result};

/// Options shared by every contract kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonOptions {
    pub access: Option<Access>,
    pub upgradeable: Option<Upgradeable>,
    pub info: Info,
}

/// Options for any supported contract kind.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum GenericOptions {
    Custom(CustomOptions),
    #[serde(rename = "ERC20")]
    Erc20(Erc20Options),
    #[serde(rename = "ERC721")]
    Erc721(Erc721Options),
}

/// Build the model for `opts` without emitting it.
pub fn build(opts: &GenericOptions, catalog: &Catalog) -> Result<ContractModel> {
    match opts {
        GenericOptions::Custom(opts) => custom::build_custom(opts, catalog),
        GenericOptions::Erc20(opts) => erc20::build_erc20(opts, catalog),
        GenericOptions::Erc721(opts) => erc721::build_erc721(opts, catalog),
    }
}

/// Build and emit the contract for `opts` with the default config.
pub fn generate(opts: &GenericOptions, catalog: &Catalog) -> Result<String> {
    generate_with_config(opts, catalog, &Config::default())
}

/// Build and emit the contract for `opts` with a custom config.
pub fn generate_with_config(
    opts: &GenericOptions,
    catalog: &Catalog,
    config: &Config,
) -> Result<String> {
    let mut model = build(opts, catalog)?;
    Ok(model.emit(config))
}

/// Start a model named after `name`, plain or upgradeable per `common`.
pub(crate) fn new_model(name: &str, common: &CommonOptions) -> Result<ContractModel> {
    let ident = to_identifier(name, true);
    if ident.is_empty() {
        return Err(Error::InvalidIdentifier {
            input: name.to_string(),
        });
    }
    Ok(match common.upgradeable {
        Some(_) => ContractModel::new_upgradeable(ident),
        None => ContractModel::new(ident),
    })
}

/// Apply the features every kind shares, in their fixed order.
pub(crate) fn apply_common(
    model: &mut ContractModel,
    catalog: &Catalog,
    common: &CommonOptions,
) -> Result<()> {
    if let Some(access) = common.access {
        access::set_access_control(model, catalog, access)?;
    }
    upgradeable::set_upgradeable(model, catalog, common.upgradeable, common.access)?;
    info::set_info(model, &common.info)
}

/// Look up `name` in the catalog as an inheritable reference.
pub(crate) fn base(catalog: &Catalog, name: &str) -> Result<ParentReference> {
    catalog
        .get(name)
        .map(ParentReference::from)
        .ok_or_else(|| Error::UnknownBaseContract {
            name: name.to_string(),
        })
}

/// Add `def` overriding every parent in `targets`.
///
/// Run after the kind's own functions so that override-only hooks come last
/// in the output.
pub(crate) fn add_overrides(
    model: &mut ContractModel,
    def: FunctionDef,
    targets: &[ParentReference],
) -> Result<FunctionId> {
    let function = model.add_function(def)?;
    for target in targets {
        model.add_override(target, function)?;
    }
    Ok(function)
}
