//! Upgradeability: proxy-compatible initializers and UUPS upgrades.

use std::fmt;
use std::str::FromStr;

use solwright_core::Catalog;

use crate::model::{ContractModel, FunctionDef, FunctionKind};
use crate::{Error, Result};

use super::access::{Access, require_access_control};
use super::base;

/// Upgradeability mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Upgradeable {
    /// Deployed behind a transparent proxy; upgrades live in the proxy admin.
    Transparent,
    /// The implementation authorizes its own upgrades.
    Uups,
}

impl Upgradeable {
    pub const ALL: [Upgradeable; 2] = [Upgradeable::Transparent, Upgradeable::Uups];

    pub fn as_str(self) -> &'static str {
        match self {
            Upgradeable::Transparent => "transparent",
            Upgradeable::Uups => "uups",
        }
    }
}

impl fmt::Display for Upgradeable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Upgradeable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Upgradeable::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| Error::UnknownEnumValue {
                kind: "upgradeable",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Upgradeable {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

pub fn authorize_upgrade() -> FunctionDef {
    FunctionDef::new("_authorizeUpgrade")
        .arg("newImplementation", "address")
        .kind(FunctionKind::Internal)
}

/// Apply `upgradeable` to a model created with
/// [`ContractModel::new_upgradeable`]. `None` leaves the model untouched.
pub fn set_upgradeable(
    model: &mut ContractModel,
    catalog: &Catalog,
    upgradeable: Option<Upgradeable>,
    access: Option<Access>,
) -> Result<()> {
    let Some(mode) = upgradeable else {
        return Ok(());
    };

    match mode {
        Upgradeable::Transparent => {}
        Upgradeable::Uups => {
            let uups = base(catalog, "UUPSUpgradeable")?;
            if model.parents().contains(&uups.name) {
                return Ok(());
            }
            let function = model.add_function(authorize_upgrade())?;
            require_access_control(model, catalog, function, access, "UPGRADER", "upgrader")?;
            // Access control parents go first so UUPSUpgradeable ends the inheritance list.
            model.add_parent(uups.clone())?;
            model.add_override(&uups, function)?;
            model.set_function_body(function, Vec::new())?;
        }
    }
    Ok(())
}
