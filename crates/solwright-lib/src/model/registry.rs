//! Symbol registry: one namespace for every identifier the contract declares.
//!
//! Imports, constants, errors, events and state variables all live here so
//! that a name is emitted at most once. Re-registering identical content is a
//! no-op; different content under a known name is a conflict.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Category of a registered symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Import,
    Constant,
    Error,
    Event,
    Variable,
}

impl SymbolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Import => "import",
            SymbolKind::Constant => "constant",
            SymbolKind::Error => "error",
            SymbolKind::Event => "event",
            SymbolKind::Variable => "variable",
        }
    }

    /// Kinds rendered in the declarations section of the contract body.
    pub fn is_declaration(self) -> bool {
        matches!(self, SymbolKind::Constant | SymbolKind::Error | SymbolKind::Event)
    }
}

/// A registered symbol.
///
/// `payload` is the import path for imports and the full declaration text
/// for everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub payload: String,
    pub doc: Vec<String>,
}

/// A named declaration (constant, error or event) with its natspec lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub text: String,
    pub doc: Vec<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            doc: Vec::new(),
        }
    }

    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct SymbolRegistry {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with `payload`, returning whether it was newly added.
    pub fn register(
        &mut self,
        kind: SymbolKind,
        name: &str,
        payload: &str,
    ) -> Result<bool> {
        self.register_with_doc(kind, name, payload, Vec::new())
    }

    pub fn register_with_doc(
        &mut self,
        kind: SymbolKind,
        name: &str,
        payload: &str,
        doc: Vec<String>,
    ) -> Result<bool> {
        if let Some(existing) = self.symbols.get(name) {
            if existing.kind == kind && existing.payload == payload {
                tracing::trace!(kind = kind.as_str(), name, "symbol already registered");
                return Ok(false);
            }
            return Err(Error::SymbolConflict {
                key: name.to_string(),
                existing: describe(existing.kind, &existing.payload),
                requested: describe(kind, payload),
            });
        }

        self.symbols.insert(
            name.to_string(),
            Symbol {
                kind,
                name: name.to_string(),
                payload: payload.to_string(),
                doc,
            },
        );
        Ok(true)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Symbols of one kind, in registration order.
    pub fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> {
        self.symbols.values().filter(move |s| s.kind == kind)
    }

    /// Constants, errors and events in registration order.
    pub fn declarations(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values().filter(|s| s.kind.is_declaration())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

fn describe(kind: SymbolKind, payload: &str) -> String {
    format!("{} {}", kind.as_str(), payload)
}
