use super::*;
use crate::Error;

fn transfer() -> FunctionDef {
    FunctionDef::new("transfer")
        .arg("to", "address")
        .arg("value", "uint256")
        .returns("bool")
}

#[test]
fn identity_ignores_argument_names() {
    let a = FunctionDef::new("f").arg("to", "address");
    let b = FunctionDef::new("f").arg("recipient", "address");
    let c = FunctionDef::new("f").arg("to", "uint256");

    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), c.key());
    assert_eq!(transfer().signature(), "transfer(address,uint256)");
}

#[test]
fn insert_returns_existing_entry() {
    let mut table = FunctionTable::new();

    let (first, created) = table.insert(transfer());
    assert!(created);
    let (second, created) = table.insert(transfer().kind(FunctionKind::External));
    assert!(!created);

    assert_eq!(first, second);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(first).unwrap().def.kind, FunctionKind::Public);
    assert_eq!(table.find(&transfer()), Some(first));
}

#[test]
fn body_is_set_once() {
    let mut table = FunctionTable::new();
    let (id, _) = table.insert(transfer());

    table.set_body(id, vec!["return true;".to_string()]).unwrap();
    let err = table.set_body(id, vec!["return false;".to_string()]).unwrap_err();

    assert_eq!(
        err,
        Error::DuplicateBody {
            function: "transfer(address,uint256)".to_string()
        }
    );
    assert_eq!(table.get(id).unwrap().body.as_deref(), Some(&["return true;".to_string()][..]));
}

#[test]
fn code_and_body_are_exclusive() {
    let mut table = FunctionTable::new();
    let (with_code, _) = table.insert(FunctionDef::new("a"));
    let (with_body, _) = table.insert(FunctionDef::new("b"));

    table.add_code(with_code, "x();".to_string()).unwrap();
    assert!(table.set_body(with_code, Vec::new()).is_err());

    table.set_body(with_body, Vec::new()).unwrap();
    assert!(table.add_code(with_body, "x();".to_string()).is_err());
}

#[test]
fn modifiers_are_deduplicated_in_first_seen_order() {
    let mut table = FunctionTable::new();
    let (id, _) = table.insert(FunctionDef::new("pause"));

    assert!(table.add_modifier(id, "onlyOwner".to_string()));
    assert!(table.add_modifier(id, "whenNotPaused".to_string()));
    assert!(!table.add_modifier(id, "onlyOwner".to_string()));

    let modifiers: Vec<&str> = table
        .get(id)
        .unwrap()
        .modifiers
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(modifiers, ["onlyOwner", "whenNotPaused"]);
}

#[test]
fn overrides_are_sorted_by_name() {
    let mut table = FunctionTable::new();
    let (id, _) = table.insert(FunctionDef::new("_update"));

    table.add_override(id, "ERC20Votes", true);
    table.add_override(id, "ERC20", true);
    table.add_override(id, "ERC20Pausable", true);
    table.add_override(id, "ERC20", true);

    let targets: Vec<&str> = table
        .get(id)
        .unwrap()
        .overrides
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(targets, ["ERC20", "ERC20Pausable", "ERC20Votes"]);
}

#[test]
fn pass_through_detection() {
    let mut table = FunctionTable::new();
    let (id, _) = table.insert(FunctionDef::new("_update"));
    assert!(!table.get(id).unwrap().is_pass_through());

    table.add_override(id, "ERC20", true);
    assert!(table.get(id).unwrap().is_pass_through());

    table.add_override(id, "ERC20Pausable", true);
    assert!(!table.get(id).unwrap().is_pass_through());

    let (plain, _) = table.insert(FunctionDef::new("pause"));
    table.set_body(plain, Vec::new()).unwrap();
    assert!(!table.get(plain).unwrap().is_pass_through());
}

#[test]
fn iteration_follows_insertion_order() {
    let mut table = FunctionTable::new();
    for name in ["mint", "pause", "burn", "unpause"] {
        table.insert(FunctionDef::new(name));
    }

    let names: Vec<&str> = table.iter().map(|e| e.def.name.as_str()).collect();
    assert_eq!(names, ["mint", "pause", "burn", "unpause"]);
}

#[test]
#[should_panic(expected = "not found")]
fn foreign_id_panics() {
    let mut table = FunctionTable::new();
    table.add_doc(FunctionId(7), "doc".to_string());
}
