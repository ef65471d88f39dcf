use crate::catalog::{CONTRACTS_PREFIX, UPGRADEABLE_PREFIX};
use crate::{Catalog, CatalogError};

#[test]
fn builtin_has_unique_names() {
    let catalog = Catalog::builtin();
    let mut names: Vec<_> = catalog.iter().map(|c| c.name.as_ref()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn builtin_lookup() {
    let catalog = Catalog::builtin();
    let erc20 = catalog.get("ERC20").unwrap();
    assert_eq!(erc20.path, "@openzeppelin/contracts/token/ERC20/ERC20.sol");
    assert!(erc20.transpiled);
    assert!(catalog.get("ERC1155").is_none());
}

#[test]
fn transpiled_entries_live_in_contracts_library() {
    for contract in Catalog::builtin().iter() {
        if contract.transpiled {
            assert!(contract.path.starts_with(CONTRACTS_PREFIX), "{}", contract.name);
        } else {
            assert!(contract.path.starts_with(UPGRADEABLE_PREFIX), "{}", contract.name);
        }
    }
}

#[test]
fn json_catalog_defaults_transpiled() {
    let catalog = Catalog::from_json(
        r#"{"contracts": [
            {"name": "Vault", "path": "@acme/contracts/Vault.sol"},
            {"name": "Proxy", "path": "@acme/proxy/Proxy.sol", "transpiled": false}
        ]}"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("Vault").unwrap().transpiled);
    assert!(!catalog.get("Proxy").unwrap().transpiled);
}

#[test]
fn json_catalog_rejects_duplicates() {
    let err = Catalog::from_json(
        r#"{"contracts": [
            {"name": "Vault", "path": "a.sol"},
            {"name": "Vault", "path": "b.sol"}
        ]}"#,
    )
    .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateEntry(name) if name == "Vault"));
}

#[test]
fn json_catalog_rejects_empty_path() {
    let err = Catalog::from_json(r#"{"contracts": [{"name": "Vault", "path": ""}]}"#).unwrap_err();
    assert_eq!(err.to_string(), "catalog entry `Vault` has an empty import path");
}

#[test]
fn json_catalog_reports_parse_errors() {
    let err = Catalog::from_json("{").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}
