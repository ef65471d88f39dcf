use solwright_core::Catalog;

use super::access::{Access, require_access_control, set_access_control};
use crate::Error;
use crate::model::{ContractModel, FunctionDef};

fn catalog() -> &'static Catalog {
    Catalog::builtin()
}

fn modifiers(model: &ContractModel, name: &str) -> Vec<String> {
    let entry = model
        .functions()
        .iter()
        .find(|e| e.def.name == name)
        .unwrap();
    entry.modifiers.iter().cloned().collect()
}

fn constructor_args(model: &ContractModel) -> Vec<String> {
    model
        .constructor()
        .ordered_args(model.parents())
        .into_iter()
        .map(|a| a.render())
        .collect()
}

#[test]
fn parse_access() {
    assert_eq!("ownable".parse::<Access>(), Ok(Access::Ownable));
    assert_eq!("roles".parse::<Access>(), Ok(Access::Roles));
    assert_eq!("managed".parse::<Access>(), Ok(Access::Managed));
    assert_eq!(
        "admin".parse::<Access>(),
        Err(Error::UnknownEnumValue {
            kind: "access",
            value: "admin".to_string()
        })
    );
    assert_eq!(Access::Roles.to_string(), "roles");
}

#[test]
fn ownable_is_idempotent() {
    let mut model = ContractModel::new("MyContract");

    set_access_control(&mut model, catalog(), Access::Ownable).unwrap();
    set_access_control(&mut model, catalog(), Access::Ownable).unwrap();

    assert_eq!(model.parents().len(), 1);
    assert_eq!(constructor_args(&model), ["address initialOwner"]);
}

#[test]
fn roles_grants_default_admin() {
    let mut model = ContractModel::new("MyContract");

    set_access_control(&mut model, catalog(), Access::Roles).unwrap();
    set_access_control(&mut model, catalog(), Access::Roles).unwrap();

    assert!(model.parents().contains("AccessControl"));
    assert_eq!(constructor_args(&model), ["address defaultAdmin"]);
    assert_eq!(
        model.constructor().code(),
        ["_grantRole(DEFAULT_ADMIN_ROLE, defaultAdmin);"]
    );
}

#[test]
fn missing_access_defaults_to_ownable() {
    let mut model = ContractModel::new("MyContract");
    let function = model.add_function(FunctionDef::new("mint")).unwrap();

    require_access_control(&mut model, catalog(), function, None, "MINTER", "minter").unwrap();

    assert!(model.parents().contains("Ownable"));
    assert_eq!(modifiers(&model, "mint"), ["onlyOwner"]);
}

#[test]
fn roles_declare_each_role_once() {
    let mut model = ContractModel::new("MyContract");
    let mint = model.add_function(FunctionDef::new("mint")).unwrap();
    let airdrop = model.add_function(FunctionDef::new("airdrop")).unwrap();
    let pause = model.add_function(FunctionDef::new("pause")).unwrap();
    let access = Some(Access::Roles);

    require_access_control(&mut model, catalog(), mint, access, "MINTER", "minter").unwrap();
    require_access_control(&mut model, catalog(), airdrop, access, "MINTER", "minter").unwrap();
    require_access_control(&mut model, catalog(), pause, access, "PAUSER", "pauser").unwrap();

    let constants: Vec<&str> = model
        .registry()
        .declarations()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(constants, ["MINTER_ROLE", "PAUSER_ROLE"]);
    assert_eq!(
        constructor_args(&model),
        ["address defaultAdmin", "address minter", "address pauser"]
    );
    assert_eq!(modifiers(&model, "airdrop"), ["onlyRole(MINTER_ROLE)"]);
    assert_eq!(modifiers(&model, "pause"), ["onlyRole(PAUSER_ROLE)"]);
}

#[test]
fn managed_uses_restricted() {
    let mut model = ContractModel::new("MyContract");
    let function = model.add_function(FunctionDef::new("mint")).unwrap();

    require_access_control(
        &mut model,
        catalog(),
        function,
        Some(Access::Managed),
        "MINTER",
        "minter",
    )
    .unwrap();

    assert!(model.parents().contains("AccessManaged"));
    assert_eq!(constructor_args(&model), ["address initialAuthority"]);
    assert_eq!(modifiers(&model, "mint"), ["restricted"]);
}

#[test]
fn access_then_pause_modifiers_accumulate() {
    let mut model = ContractModel::new("MyContract");
    let function = model.add_function(FunctionDef::new("transfer")).unwrap();
    model.set_function_body(function, Vec::new()).unwrap();

    require_access_control(&mut model, catalog(), function, None, "MINTER", "minter").unwrap();
    super::pausable::add_pausable(&mut model, catalog(), None, &[function]).unwrap();

    assert_eq!(modifiers(&model, "transfer"), ["onlyOwner", "whenNotPaused"]);
    assert_eq!(modifiers(&model, "pause"), ["onlyOwner"]);
}
