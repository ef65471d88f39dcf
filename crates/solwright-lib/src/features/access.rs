//! Access control: who may call restricted functions.

use std::fmt;
use std::str::FromStr;

use solwright_core::Catalog;

use crate::model::{ConstructorArg, ContractModel, Declaration, FunctionId, Owner, ParentArg};
use crate::{Error, Result};

use super::base;

/// Access control mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Access {
    /// Single owner (`Ownable`).
    Ownable,
    /// Role-based (`AccessControl`).
    Roles,
    /// Delegated to an `AccessManager` (`AccessManaged`).
    Managed,
}

impl Access {
    pub const ALL: [Access; 3] = [Access::Ownable, Access::Roles, Access::Managed];

    pub fn as_str(self) -> &'static str {
        match self {
            Access::Ownable => "ownable",
            Access::Roles => "roles",
            Access::Managed => "managed",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Access {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Access::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::UnknownEnumValue {
                kind: "access",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Access {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Install the access control mechanism for `access`. Idempotent.
pub fn set_access_control(model: &mut ContractModel, catalog: &Catalog, access: Access) -> Result<()> {
    match access {
        Access::Ownable => {
            let ownable = base(catalog, "Ownable")?.arg(ParentArg::reference("initialOwner"));
            if model.add_parent(ownable)? {
                model.add_constructor_argument(
                    ConstructorArg::new("initialOwner", "address"),
                    Owner::parent("Ownable"),
                )?;
            }
        }
        Access::Roles => {
            if model.add_parent(base(catalog, "AccessControl")?)? {
                model.add_constructor_argument(
                    ConstructorArg::new("defaultAdmin", "address"),
                    Owner::Own,
                )?;
                model.add_constructor_code("_grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin);")?;
            }
        }
        Access::Managed => {
            let managed =
                base(catalog, "AccessManaged")?.arg(ParentArg::reference("initialAuthority"));
            if model.add_parent(managed)? {
                model.add_constructor_argument(
                    ConstructorArg::new("initialAuthority", "address"),
                    Owner::parent("AccessManaged"),
                )?;
            }
        }
    }
    Ok(())
}

/// Restrict `function` under `access`.
///
/// When no access control was requested, `Ownable` is substituted: a
/// function that needs restricting is never left open.
///
/// For roles, `role_prefix` names the role constant (`MINTER` ->
/// `MINTER_ROLE`) and `role_owner` the constructor argument that receives it.
pub fn require_access_control(
    model: &mut ContractModel,
    catalog: &Catalog,
    function: FunctionId,
    access: Option<Access>,
    role_prefix: &str,
    role_owner: &str,
) -> Result<()> {
    let access = access.unwrap_or(Access::Ownable);
    set_access_control(model, catalog, access)?;

    match access {
        Access::Ownable => model.add_modifier(function, "onlyOwner"),
        Access::Roles => {
            let role = format!("{role_prefix}_ROLE");
            let constant = Declaration::new(
                role.clone(),
                format!("bytes32 public constant {role} = keccak256(\"{role}\");"),
            );
            if model.add_constant(constant)? {
                model.add_constructor_argument(
                    ConstructorArg::new(role_owner, "address"),
                    Owner::Own,
                )?;
                model.add_constructor_code(format!("_grantRole({role}, {role_owner});"))?;
            }
            model.add_modifier(function, format!("onlyRole({role})"))
        }
        Access::Managed => model.add_modifier(function, "restricted"),
    }
}
