//! Function table keyed by `(name, argument types)`.
//!
//! Entries are created once and then only decorated: later features add
//! modifiers, override targets, doc lines and storage access, but never
//! replace what an earlier feature defined.

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};

use crate::{Error, Result};

/// Handle to an entry in the function table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub(crate) u32);

impl FunctionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Function visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FunctionKind {
    #[default]
    Public,
    External,
    Internal,
    Private,
}

impl FunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Public => "public",
            FunctionKind::External => "external",
            FunctionKind::Internal => "internal",
            FunctionKind::Private => "private",
        }
    }
}

/// State mutability. `Nonpayable` is implicit in Solidity and never rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mutability {
    #[default]
    Nonpayable,
    Payable,
    View,
    Pure,
}

impl Mutability {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Mutability::Nonpayable => None,
            Mutability::Payable => Some("payable"),
            Mutability::View => Some("view"),
            Mutability::Pure => Some("pure"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionArg {
    pub name: String,
    pub ty: String,
}

impl FunctionArg {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Signature of a function as requested by a feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    pub args: Vec<FunctionArg>,
    pub returns: Vec<String>,
    pub kind: FunctionKind,
    pub mutability: Mutability,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            returns: Vec::new(),
            kind: FunctionKind::default(),
            mutability: Mutability::default(),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(FunctionArg::new(name, ty));
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns.push(ty.into());
        self
    }

    pub fn kind(mut self, kind: FunctionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    /// Identity key: name plus argument types, argument names excluded.
    pub fn key(&self) -> FunctionKey {
        FunctionKey {
            name: self.name.clone(),
            arg_types: self.args.iter().map(|a| a.ty.clone()).collect(),
        }
    }

    /// `name(type1,type2)`, used in diagnostics.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.args.iter().map(|a| a.ty.as_str()).collect();
        format!("{}({})", self.name, types.join(","))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionKey {
    pub name: String,
    pub arg_types: Vec<String>,
}

/// A function with everything features attached to it.
#[derive(Clone, Debug)]
pub struct FunctionEntry {
    pub def: FunctionDef,
    /// Final body. `Some(vec![])` is an intentionally empty body.
    pub body: Option<Vec<String>>,
    /// Lines that run before the implicit `super` call of a non-final override.
    pub code: Vec<String>,
    pub modifiers: IndexSet<String>,
    /// Override targets: parent name -> whether it has an upgradeable variant.
    pub overrides: BTreeMap<String, bool>,
    pub doc: Vec<String>,
    /// Storage namespaces whose record this function reads or writes.
    pub storage: IndexSet<String>,
}

impl FunctionEntry {
    fn new(def: FunctionDef) -> Self {
        Self {
            def,
            body: None,
            code: Vec::new(),
            modifiers: IndexSet::new(),
            overrides: BTreeMap::new(),
            doc: Vec::new(),
            storage: IndexSet::new(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.body.is_some()
    }

    /// A lone override without code or modifiers repeats the inherited
    /// definition and is left out of the output. A function that overrides
    /// nothing is always emitted, with an empty body if it has none.
    pub fn is_pass_through(&self) -> bool {
        self.overrides.len() == 1
            && self.modifiers.is_empty()
            && self.code.is_empty()
            && self.body.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    entries: IndexMap<FunctionKey, FunctionEntry>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `def`'s identity, creating it if needed.
    pub fn insert(&mut self, def: FunctionDef) -> (FunctionId, bool) {
        let key = def.key();
        if let Some(index) = self.entries.get_index_of(&key) {
            return (FunctionId(index as u32), false);
        }
        let (index, _) = self.entries.insert_full(key, FunctionEntry::new(def));
        (FunctionId(index as u32), true)
    }

    pub fn get(&self, id: FunctionId) -> Option<&FunctionEntry> {
        self.entries.get_index(id.index()).map(|(_, entry)| entry)
    }

    pub(crate) fn get_mut(&mut self, id: FunctionId) -> Option<&mut FunctionEntry> {
        self.entries.get_index_mut(id.index()).map(|(_, entry)| entry)
    }

    pub fn find(&self, def: &FunctionDef) -> Option<FunctionId> {
        self.entries
            .get_index_of(&def.key())
            .map(|index| FunctionId(index as u32))
    }

    pub fn set_body(&mut self, id: FunctionId, lines: Vec<String>) -> Result<()> {
        let entry = self.ensure_entry(id);
        if entry.is_final() || !entry.code.is_empty() {
            return Err(Error::DuplicateBody {
                function: entry.def.signature(),
            });
        }
        entry.body = Some(lines);
        Ok(())
    }

    pub fn add_code(&mut self, id: FunctionId, line: String) -> Result<()> {
        let entry = self.ensure_entry(id);
        if entry.is_final() {
            return Err(Error::DuplicateBody {
                function: entry.def.signature(),
            });
        }
        entry.code.push(line);
        Ok(())
    }

    pub fn add_modifier(&mut self, id: FunctionId, modifier: String) -> bool {
        self.ensure_entry(id).modifiers.insert(modifier)
    }

    pub fn add_override(&mut self, id: FunctionId, parent: &str, transpiled: bool) {
        self.ensure_entry(id)
            .overrides
            .entry(parent.to_string())
            .or_insert(transpiled);
    }

    pub fn add_doc(&mut self, id: FunctionId, line: String) {
        self.ensure_entry(id).doc.push(line);
    }

    pub fn use_storage(&mut self, id: FunctionId, namespace: &str) {
        self.ensure_entry(id).storage.insert(namespace.to_string());
    }

    pub fn iter(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
