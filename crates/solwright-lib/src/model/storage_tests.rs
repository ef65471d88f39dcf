use super::storage::{erc7201_location, storage_id};
use super::*;

#[test]
fn slot_matches_known_openzeppelin_locations() {
    assert_eq!(
        erc7201_slot("openzeppelin", "ERC20"),
        "0x52c63247e1f47db19d5ce0460030c497f067ca4cebf71ba98eeadabe20bace00"
    );
    assert_eq!(
        erc7201_slot("openzeppelin", "Ownable"),
        "0x9016d09d72d40fdae2fd8ceac6b6234c7706214fd39c1cd1e609a0528c199300"
    );
}

#[test]
fn slot_is_derived_from_the_composite_id() {
    assert_eq!(storage_id("openzeppelin", "MyToken"), "openzeppelin.storage.MyToken");
    assert_eq!(
        erc7201_slot("openzeppelin", "MyToken"),
        erc7201_location("openzeppelin.storage.MyToken")
    );
}

#[test]
fn slot_depends_on_both_inputs() {
    let base = erc7201_slot("openzeppelin", "MyToken");

    assert_eq!(base, erc7201_slot("openzeppelin", "MyToken"));
    assert_ne!(base, erc7201_slot("acme", "MyToken"));
    assert_ne!(base, erc7201_slot("openzeppelin", "MyToken2"));
}

#[test]
fn slot_clears_the_last_byte() {
    let slot = erc7201_slot("acme", "Vault");

    assert_eq!(slot.len(), 66);
    assert!(slot.starts_with("0x"));
    assert!(slot.ends_with("00"));
}

#[test]
fn plain_layout_keeps_declarations() {
    let mut layout = StorageLayout::new(false);

    assert!(layout.add(StateVariable::new("_nextTokenId", "uint256"), DEFAULT_NAMESPACE));
    assert!(!layout.add(StateVariable::new("_nextTokenId", "uint256"), DEFAULT_NAMESPACE));

    assert_eq!(layout.placement("_nextTokenId"), Some(&Placement::Plain));
    assert_eq!(layout.plain()[0].declaration(), "uint256 private _nextTokenId;");
    assert_eq!(layout.records().count(), 0);
}

#[test]
fn namespaced_layout_groups_by_namespace() {
    let mut layout = StorageLayout::new(true);
    layout.add(StateVariable::new("_nextTokenId", "uint256"), DEFAULT_NAMESPACE);
    layout.add(StateVariable::new("_cap", "uint256"), DEFAULT_NAMESPACE);
    layout.add(
        StateVariable::new("_fees", "uint256").visibility(Visibility::Internal),
        "acme.fees",
    );

    assert!(layout.plain().is_empty());
    let record = layout.record(DEFAULT_NAMESPACE).unwrap();
    let fields: Vec<String> = record.fields.iter().map(StateVariable::field).collect();
    assert_eq!(fields, ["uint256 _nextTokenId;", "uint256 _cap;"]);
    assert_eq!(
        layout.placement("_fees"),
        Some(&Placement::Record("acme.fees".to_string()))
    );
    assert_eq!(record.id("MyToken"), "openzeppelin.storage.MyToken");
}

#[test]
fn first_record_takes_short_names() {
    let mut layout = StorageLayout::new(true);
    layout.add(StateVariable::new("_a", "uint256"), "openzeppelin");
    layout.add(StateVariable::new("_b", "uint256"), "acme");

    let first = layout.record_names("openzeppelin", "MyToken").unwrap();
    assert_eq!(first.struct_name, "MyTokenStorage");
    assert_eq!(first.location, "MyTokenStorageLocation");
    assert_eq!(first.getter, "_getMyTokenStorage");
    assert_eq!(first.var, "$");

    let second = layout.record_names("acme", "MyToken").unwrap();
    assert_eq!(second.struct_name, "MyTokenAcmeStorage");
    assert_eq!(second.var, "$Acme");

    assert_eq!(layout.record_names("missing", "MyToken"), None);
}

#[test]
fn similar_namespaces_get_distinct_names() {
    let mut layout = StorageLayout::new(true);
    layout.add(StateVariable::new("_a", "uint256"), "openzeppelin");
    layout.add(StateVariable::new("_b", "uint256"), "acme.vault");
    layout.add(StateVariable::new("_c", "uint256"), "acme_vault");
    layout.add(StateVariable::new("_d", "uint256"), "AcmeVault");

    let names: Vec<(String, String)> = ["acme.vault", "acme_vault", "AcmeVault"]
        .into_iter()
        .map(|ns| layout.record_names(ns, "V").unwrap())
        .map(|n| (n.struct_name, n.var))
        .collect();
    assert_eq!(
        names,
        [
            ("VAcmeVaultStorage".to_string(), "$AcmeVault".to_string()),
            ("VAcmeVault2Storage".to_string(), "$AcmeVault2".to_string()),
            ("VAcmeVault3Storage".to_string(), "$AcmeVault3".to_string()),
        ]
    );
}
