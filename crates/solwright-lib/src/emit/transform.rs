//! Name and path mapping for upgradeable builds.

use std::borrow::Cow;

use solwright_core::catalog::{CONTRACTS_PREFIX, UPGRADEABLE_PREFIX};

/// `ERC20` -> `ERC20Upgradeable`
pub(crate) fn upgradeable_name(name: &str) -> String {
    format!("{name}Upgradeable")
}

/// `@openzeppelin/contracts/token/ERC20/ERC20.sol`
/// -> `@openzeppelin/contracts-upgradeable/token/ERC20/ERC20Upgradeable.sol`
pub(crate) fn upgradeable_path(path: &str) -> String {
    let path = match path.strip_prefix(CONTRACTS_PREFIX) {
        Some(rest) => format!("{UPGRADEABLE_PREFIX}{rest}"),
        None => path.to_string(),
    };
    match path.strip_suffix(".sol") {
        Some(stem) => format!("{stem}Upgradeable.sol"),
        None => path,
    }
}

/// Name as written in the output.
pub(crate) fn emitted_name(name: &str, transpiled: bool, upgradeable: bool) -> Cow<'_, str> {
    if upgradeable && transpiled {
        Cow::Owned(upgradeable_name(name))
    } else {
        Cow::Borrowed(name)
    }
}

/// Name of the initializer a transpiled parent exposes.
pub(crate) fn init_function(name: &str) -> String {
    format!("__{name}_init")
}
