//! Core emitter struct and main emit logic.

use crate::model::ContractModel;

use super::Config;

/// Solidity emitter over a fully built model.
pub struct Emitter<'a> {
    pub(super) model: &'a ContractModel,
    pub(super) config: &'a Config,
    /// Whether a member was written since the contract body opened
    pub(super) body_started: bool,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a ContractModel, config: &'a Config) -> Self {
        Self {
            model,
            config,
            body_started: false,
            output: String::new(),
        }
    }

    /// Emit the complete source file.
    pub fn emit(mut self) -> String {
        self.emit_header();
        self.emit_imports();
        self.emit_contract_open();

        self.emit_declarations();
        if self.model.storage().is_namespaced() {
            self.emit_storage_records();
        } else {
            self.emit_plain_variables();
        }
        if self.model.is_upgradeable() {
            self.emit_initializer();
        } else {
            self.emit_constructor();
        }
        self.emit_functions();

        if !self.body_started {
            // `contract X {` becomes `contract X {}`
            self.output.pop();
        }
        self.output.push_str("}\n");
        self.output
    }

    /// Start a member block, separated from the previous one by a blank line.
    pub(super) fn begin_block(&mut self) {
        if self.body_started {
            self.output.push('\n');
        }
        self.body_started = true;
    }

    pub(super) fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str("    ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}
