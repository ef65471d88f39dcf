//! Ordered set of inherited base contracts.

use indexmap::IndexMap;
use solwright_core::BaseContract;
use solwright_core::utils::escape_string_literal;

/// One construction argument passed to a parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParentArg {
    /// Rendered as a quoted string literal.
    Literal(String),
    /// Rendered verbatim: a constructor argument name or expression.
    Reference(String),
}

impl ParentArg {
    pub fn literal(value: impl Into<String>) -> Self {
        ParentArg::Literal(value.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        ParentArg::Reference(name.into())
    }

    pub fn render(&self) -> String {
        match self {
            ParentArg::Literal(value) => format!("\"{}\"", escape_string_literal(value)),
            ParentArg::Reference(name) => name.clone(),
        }
    }
}

/// A base contract as inherited by the contract being built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParentReference {
    pub name: String,
    pub path: String,
    pub args: Vec<ParentArg>,
    /// Whether upgradeable builds swap in the `<Name>Upgradeable` variant.
    pub transpiled: bool,
}

impl ParentReference {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            args: Vec::new(),
            transpiled: true,
        }
    }

    pub fn arg(mut self, arg: ParentArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn transpiled(mut self, value: bool) -> Self {
        self.transpiled = value;
        self
    }
}

impl From<&BaseContract> for ParentReference {
    fn from(base: &BaseContract) -> Self {
        Self {
            name: base.name.to_string(),
            path: base.path.to_string(),
            args: Vec::new(),
            transpiled: base.transpiled,
        }
    }
}

/// Parents in first-added order.
#[derive(Clone, Debug, Default)]
pub struct ParentSet {
    parents: IndexMap<String, ParentReference>,
}

impl ParentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `parent` unless its name is already present.
    pub fn insert(&mut self, parent: ParentReference) -> bool {
        if self.parents.contains_key(&parent.name) {
            return false;
        }
        self.parents.insert(parent.name.clone(), parent);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ParentReference> {
        self.parents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parents.contains_key(name)
    }

    /// Position of `name` in inheritance order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parents.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParentReference> {
        self.parents.values()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
