//! State variable placement and ERC-7201 namespaced storage.
//!
//! Plain builds declare every state variable directly. Upgradeable builds
//! group variables into one struct per namespace, stored at a slot derived
//! from `"<namespace>.storage.<Contract>"`:
//!
//! ```text
//! keccak256(abi.encode(uint256(keccak256(id)) - 1)) & ~bytes32(uint256(0xff))
//! ```

use indexmap::IndexMap;
use sha3::{Digest, Keccak256};
use solwright_core::utils::to_pascal_case;

/// Namespace used when a feature does not pick one.
pub const DEFAULT_NAMESPACE: &str = "openzeppelin";

/// State variable visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Private,
    Internal,
    Public,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Internal => "internal",
            Visibility::Public => "public",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateVariable {
    pub name: String,
    pub ty: String,
    pub visibility: Visibility,
}

impl StateVariable {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            visibility: Visibility::default(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// `uint256 private _nextTokenId;`
    pub fn declaration(&self) -> String {
        format!("{} {} {};", self.ty, self.visibility.as_str(), self.name)
    }

    /// `uint256 _nextTokenId;` as a struct field.
    pub fn field(&self) -> String {
        format!("{} {};", self.ty, self.name)
    }
}

/// Where a state variable lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    Plain,
    Record(String),
}

/// Variables sharing one namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageRecord {
    pub namespace: String,
    pub fields: Vec<StateVariable>,
    /// Inserted into the generated names; empty for the first record.
    pub suffix: String,
}

impl StorageRecord {
    pub fn id(&self, contract: &str) -> String {
        storage_id(&self.namespace, contract)
    }

    pub fn slot(&self, contract: &str) -> String {
        erc7201_slot(&self.namespace, contract)
    }
}

/// Identifiers generated around one storage record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordNames {
    /// `MyTokenStorage`
    pub struct_name: String,
    /// `MyTokenStorageLocation`
    pub location: String,
    /// `_getMyTokenStorage`
    pub getter: String,
    /// Local variable bound by the accessor statement (`$`).
    pub var: String,
}

#[derive(Clone, Debug, Default)]
pub struct StorageLayout {
    namespaced: bool,
    plain: Vec<StateVariable>,
    records: IndexMap<String, StorageRecord>,
    placements: IndexMap<String, Placement>,
}

impl StorageLayout {
    pub fn new(namespaced: bool) -> Self {
        Self {
            namespaced,
            ..Self::default()
        }
    }

    pub fn is_namespaced(&self) -> bool {
        self.namespaced
    }

    /// Place `var`. Returns false if a variable with the same field text
    /// is already placed.
    pub fn add(&mut self, var: StateVariable, namespace: &str) -> bool {
        if self.placements.contains_key(&var.name) {
            return false;
        }

        if !self.namespaced {
            self.placements.insert(var.name.clone(), Placement::Plain);
            self.plain.push(var);
            return true;
        }

        if !self.records.contains_key(namespace) {
            let suffix = self.unique_suffix(namespace);
            self.records.insert(
                namespace.to_string(),
                StorageRecord {
                    namespace: namespace.to_string(),
                    fields: Vec::new(),
                    suffix,
                },
            );
        }
        let Some(record) = self.records.get_mut(namespace) else {
            return false;
        };
        if record.fields.iter().any(|f| f.field() == var.field()) {
            return false;
        }
        self.placements
            .insert(var.name.clone(), Placement::Record(namespace.to_string()));
        record.fields.push(var);
        true
    }

    /// Namespaces that differ only in separators or case (`acme.vault`,
    /// `acme_vault`) get a numbered suffix so generated names stay distinct.
    fn unique_suffix(&self, namespace: &str) -> String {
        if self.records.is_empty() {
            return String::new();
        }
        let base = to_pascal_case(namespace);
        let taken = |candidate: &str| self.records.values().any(|r| r.suffix == candidate);
        let mut suffix = base.clone();
        let mut n = 2;
        while taken(&suffix) {
            suffix = format!("{base}{n}");
            n += 1;
        }
        suffix
    }

    pub fn placement(&self, name: &str) -> Option<&Placement> {
        self.placements.get(name)
    }

    pub fn plain(&self) -> &[StateVariable] {
        &self.plain
    }

    pub fn records(&self) -> impl Iterator<Item = &StorageRecord> {
        self.records.values()
    }

    pub fn record(&self, namespace: &str) -> Option<&StorageRecord> {
        self.records.get(namespace)
    }

    /// Names for the record of `namespace`. The first record takes the
    /// short names; later ones are disambiguated by their namespace.
    pub fn record_names(&self, namespace: &str, contract: &str) -> Option<RecordNames> {
        let suffix = &self.records.get(namespace)?.suffix;
        let struct_name = format!("{contract}{suffix}Storage");
        let var = format!("${suffix}");
        Some(RecordNames {
            location: format!("{struct_name}Location"),
            getter: format!("_get{struct_name}"),
            struct_name,
            var,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// `"<namespace>.storage.<contract>"`
pub fn storage_id(namespace: &str, contract: &str) -> String {
    format!("{namespace}.storage.{contract}")
}

/// ERC-7201 slot for `namespace` and `contract`, as `0x`-prefixed hex.
pub fn erc7201_slot(namespace: &str, contract: &str) -> String {
    erc7201_location(&storage_id(namespace, contract))
}

/// ERC-7201 slot for a full namespace id.
pub fn erc7201_location(id: &str) -> String {
    let mut word: [u8; 32] = Keccak256::digest(id.as_bytes()).into();

    // uint256(keccak256(id)) - 1, big-endian
    for byte in word.iter_mut().rev() {
        let (value, borrow) = byte.overflowing_sub(1);
        *byte = value;
        if !borrow {
            break;
        }
    }

    let mut slot: [u8; 32] = Keccak256::digest(word).into();
    slot[31] = 0;
    format!("0x{}", hex::encode(slot))
}
