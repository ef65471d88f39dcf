//! The build-session aggregate.
//!
//! A [`ContractModel`] starts in the `Building` state, where feature modules
//! mutate it in any order. The first call to [`ContractModel::emit`] moves it
//! to `Emitted`; from then on every mutation fails with
//! [`Error::ModelFrozen`](crate::Error::ModelFrozen) and emission keeps
//! returning the same text.

mod constructor;
mod functions;
mod invariants;
mod parents;
mod registry;
pub mod storage;

#[cfg(test)]
mod functions_tests;
#[cfg(test)]
mod storage_tests;

pub use constructor::{ConstructorArg, ConstructorModel, Owner};
pub use functions::{
    FunctionArg, FunctionDef, FunctionEntry, FunctionId, FunctionKey, FunctionKind,
    FunctionTable, Mutability,
};
pub use parents::{ParentArg, ParentReference, ParentSet};
pub use registry::{Declaration, Symbol, SymbolKind, SymbolRegistry};
pub use storage::{
    DEFAULT_NAMESPACE, Placement, RecordNames, StateVariable, StorageLayout, StorageRecord,
    Visibility, erc7201_slot,
};

use std::collections::HashSet;

use crate::emit::{self, Config};
use crate::{Error, Result};

/// Lifecycle of a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Building,
    Emitted,
}

/// An import as seen by the emitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportEntry<'a> {
    pub name: &'a str,
    pub path: &'a str,
    /// True when nothing is inherited under this name.
    pub import_only: bool,
    /// Whether upgradeable builds import the `<Name>Upgradeable` variant.
    pub transpiled: bool,
}

/// Everything one contract accumulates during a build session.
#[derive(Clone, Debug)]
pub struct ContractModel {
    name: String,
    upgradeable: bool,
    state: State,
    license: Option<String>,
    natspec: Vec<(String, String)>,
    namespace: String,
    registry: SymbolRegistry,
    transpiled: HashSet<String>,
    parents: ParentSet,
    functions: FunctionTable,
    constructor: ConstructorModel,
    storage: StorageLayout,
}

impl ContractModel {
    /// Model for a plain (non-upgradeable) contract.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_layout(name.into(), false)
    }

    /// Model for an upgradeable contract: state goes to namespaced storage
    /// and the constructor becomes an initializer.
    pub fn new_upgradeable(name: impl Into<String>) -> Self {
        Self::with_layout(name.into(), true)
    }

    fn with_layout(name: String, upgradeable: bool) -> Self {
        Self {
            name,
            upgradeable,
            state: State::Building,
            license: None,
            natspec: Vec::new(),
            namespace: storage::DEFAULT_NAMESPACE.to_string(),
            registry: SymbolRegistry::new(),
            transpiled: HashSet::new(),
            parents: ParentSet::new(),
            functions: FunctionTable::new(),
            constructor: ConstructorModel::new(),
            storage: StorageLayout::new(upgradeable),
        }
    }

    fn ensure_building(&self) -> Result<()> {
        match self.state {
            State::Building => Ok(()),
            State::Emitted => Err(Error::ModelFrozen),
        }
    }

    // Info

    pub fn set_license(&mut self, license: impl Into<String>) -> Result<()> {
        self.ensure_building()?;
        self.license = Some(license.into());
        Ok(())
    }

    /// Add a contract-level natspec tag such as `@custom:security-contact`.
    pub fn add_natspec_tag(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.ensure_building()?;
        let tag = (key.into(), value.into());
        if !self.natspec.contains(&tag) {
            self.natspec.push(tag);
        }
        Ok(())
    }

    /// Namespace used by [`add_variable`](Self::add_variable) from now on.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) -> Result<()> {
        self.ensure_building()?;
        self.namespace = namespace.into();
        Ok(())
    }

    // Symbols

    /// Import `name` from `path` without inheriting it.
    pub fn add_import(&mut self, name: &str, path: &str) -> Result<bool> {
        self.ensure_building()?;
        self.registry.register(SymbolKind::Import, name, path)
    }

    /// Import a base contract without inheriting it. Upgradeable builds
    /// import its upgradeable variant when it has one.
    pub fn add_import_of(&mut self, base: &ParentReference) -> Result<bool> {
        self.ensure_building()?;
        let added = self
            .registry
            .register(SymbolKind::Import, &base.name, &base.path)?;
        if base.transpiled {
            self.transpiled.insert(base.name.clone());
        }
        Ok(added)
    }

    pub fn add_constant(&mut self, decl: Declaration) -> Result<bool> {
        self.add_declaration(SymbolKind::Constant, decl)
    }

    pub fn add_error(&mut self, decl: Declaration) -> Result<bool> {
        self.add_declaration(SymbolKind::Error, decl)
    }

    pub fn add_event(&mut self, decl: Declaration) -> Result<bool> {
        self.add_declaration(SymbolKind::Event, decl)
    }

    fn add_declaration(&mut self, kind: SymbolKind, decl: Declaration) -> Result<bool> {
        self.ensure_building()?;
        self.registry
            .register_with_doc(kind, &decl.name, &decl.text, decl.doc)
    }

    // Parents

    /// Inherit `parent`. Returns false if a parent with the same name is
    /// already present, in which case nothing changes. A parent whose name
    /// is already imported from another path is a `SymbolConflict`.
    pub fn add_parent(&mut self, parent: ParentReference) -> Result<bool> {
        self.ensure_building()?;
        self.registry
            .register(SymbolKind::Import, &parent.name, &parent.path)?;
        if self.parents.contains(&parent.name) {
            tracing::trace!(parent = %parent.name, "parent already present");
            return Ok(false);
        }
        if parent.transpiled {
            self.transpiled.insert(parent.name.clone());
        }
        tracing::debug!(parent = %parent.name, args = parent.args.len(), "adding parent");
        Ok(self.parents.insert(parent))
    }

    /// Declare that `function` overrides the definition inherited from `parent`.
    ///
    /// The override target must be in scope, so it is imported if it is not
    /// inherited directly.
    pub fn add_override(&mut self, parent: &ParentReference, function: FunctionId) -> Result<()> {
        self.add_import_of(parent)?;
        self.functions
            .add_override(function, &parent.name, parent.transpiled);
        Ok(())
    }

    // Functions

    /// Get or create the function with `def`'s identity.
    pub fn add_function(&mut self, def: FunctionDef) -> Result<FunctionId> {
        self.ensure_building()?;
        let signature = def.signature();
        let (id, created) = self.functions.insert(def);
        if created {
            tracing::debug!(function = %signature, "adding function");
        }
        Ok(id)
    }

    /// Give `function` its final body. Fails if it already has one.
    pub fn set_function_body(&mut self, function: FunctionId, lines: Vec<String>) -> Result<()> {
        self.ensure_building()?;
        self.functions.set_body(function, lines)?;
        tracing::debug!(function = ?function, "function body finalized");
        Ok(())
    }

    /// Append a line that runs before the inherited implementation.
    pub fn add_function_code(&mut self, function: FunctionId, line: impl Into<String>) -> Result<()> {
        self.ensure_building()?;
        self.functions.add_code(function, line.into())
    }

    /// Attach `modifier` to `function` unless it is already attached.
    pub fn add_modifier(&mut self, function: FunctionId, modifier: impl Into<String>) -> Result<()> {
        self.ensure_building()?;
        self.functions.add_modifier(function, modifier.into());
        Ok(())
    }

    pub fn add_function_doc(&mut self, function: FunctionId, line: impl Into<String>) -> Result<()> {
        self.ensure_building()?;
        self.functions.add_doc(function, line.into());
        Ok(())
    }

    // Constructor

    pub fn add_constructor_argument(&mut self, arg: ConstructorArg, owner: Owner) -> Result<bool> {
        self.ensure_building()?;
        self.constructor.add_argument(arg, owner)
    }

    pub fn add_constructor_code(&mut self, stmt: impl Into<String>) -> Result<()> {
        self.ensure_building()?;
        self.constructor.add_code(stmt.into());
        Ok(())
    }

    // Storage

    /// Declare a state variable in the current namespace.
    pub fn add_variable(&mut self, var: StateVariable) -> Result<bool> {
        let namespace = self.namespace.clone();
        self.add_variable_in(&namespace, var)
    }

    /// Declare a state variable in `namespace` (ignored by plain builds).
    ///
    /// Re-declaring a variable is a no-op only within the same namespace;
    /// moving it to another record is a `SymbolConflict`.
    pub fn add_variable_in(&mut self, namespace: &str, var: StateVariable) -> Result<bool> {
        self.ensure_building()?;
        if !self
            .registry
            .register(SymbolKind::Variable, &var.name, &var.declaration())?
        {
            if let Some(Placement::Record(existing)) = self.storage.placement(&var.name)
                && existing != namespace
            {
                return Err(Error::SymbolConflict {
                    key: var.name,
                    existing: format!("variable in {existing}"),
                    requested: format!("variable in {namespace}"),
                });
            }
            return Ok(false);
        }
        Ok(self.storage.add(var, namespace))
    }

    /// Expression that reads or writes `variable` from inside `function`.
    ///
    /// In upgradeable builds this marks `function` so the emitter binds the
    /// storage record once at the top of its body.
    pub fn storage_access(&mut self, function: FunctionId, variable: &str) -> Result<String> {
        self.ensure_building()?;
        let placement = self
            .storage
            .placement(variable)
            .ok_or_else(|| Error::UnknownStateVariable {
                name: variable.to_string(),
            })?;

        match placement {
            Placement::Plain => Ok(variable.to_string()),
            Placement::Record(namespace) => {
                let namespace = namespace.clone();
                let names = self
                    .storage
                    .record_names(&namespace, &self.name)
                    .ok_or_else(|| Error::UnknownStateVariable {
                        name: variable.to_string(),
                    })?;
                self.functions.use_storage(function, &namespace);
                Ok(format!("{}.{variable}", names.var))
            }
        }
    }

    // Emission

    /// Render the contract and freeze the model.
    ///
    /// Rendering is pure: calling this again on the frozen model with the
    /// same config returns byte-identical text.
    pub fn emit(&mut self, config: &Config) -> String {
        let output = emit::render(self, config);
        if self.state == State::Building {
            tracing::debug!(contract = %self.name, bytes = output.len(), "model emitted");
            self.state = State::Emitted;
        }
        output
    }

    // Read access

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_upgradeable(&self) -> bool {
        self.upgradeable
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn natspec(&self) -> &[(String, String)] {
        &self.natspec
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    pub fn parents(&self) -> &ParentSet {
        &self.parents
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn function(&self, id: FunctionId) -> Option<&FunctionEntry> {
        self.functions.get(id)
    }

    pub fn constructor(&self) -> &ConstructorModel {
        &self.constructor
    }

    pub fn storage(&self) -> &StorageLayout {
        &self.storage
    }

    /// Imports in registration order, flagged by whether they are inherited.
    pub fn imports(&self) -> impl Iterator<Item = ImportEntry<'_>> {
        self.registry.of_kind(SymbolKind::Import).map(|symbol| ImportEntry {
            name: &symbol.name,
            path: &symbol.payload,
            import_only: !self.parents.contains(&symbol.name),
            transpiled: self.transpiled.contains(&symbol.name),
        })
    }
}
