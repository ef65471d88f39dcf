//! Output rendering methods.

use crate::model::{FunctionEntry, ParentArg, ParentReference};

use super::Emitter;
use super::transform::{emitted_name, init_function, upgradeable_name, upgradeable_path};

const INITIALIZABLE: &str = "Initializable";
const INITIALIZABLE_PATH: &str =
    "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol";

impl Emitter<'_> {
    pub(super) fn emit_header(&mut self) {
        let license = self
            .model
            .license()
            .unwrap_or(&self.config.license)
            .to_string();
        let pragma = self.config.pragma.clone();
        self.line(0, &format!("// SPDX-License-Identifier: {license}"));
        self.line(0, &format!("pragma solidity {pragma};"));
        self.output.push('\n');
    }

    pub(super) fn emit_imports(&mut self) {
        let model = self.model;
        let upgradeable = model.is_upgradeable();
        let mut lines = Vec::new();

        if upgradeable && !model.registry().contains(INITIALIZABLE) {
            lines.push(import_line(INITIALIZABLE, INITIALIZABLE_PATH));
        }
        for import in model.imports() {
            if upgradeable && import.transpiled {
                lines.push(import_line(
                    &upgradeable_name(import.name),
                    &upgradeable_path(import.path),
                ));
            } else {
                lines.push(import_line(import.name, import.path));
            }
        }

        if lines.is_empty() {
            return;
        }
        for line in &lines {
            self.line(0, line);
        }
        self.output.push('\n');
    }

    pub(super) fn emit_contract_open(&mut self) {
        let model = self.model;
        for (key, value) in model.natspec() {
            self.line(0, &format!("/// {key} {value}"));
        }

        let upgradeable = model.is_upgradeable();
        let mut parents: Vec<String> = Vec::new();
        if upgradeable && !model.parents().contains(INITIALIZABLE) {
            parents.push(INITIALIZABLE.to_string());
        }
        parents.extend(
            model
                .parents()
                .iter()
                .map(|p| emitted_name(&p.name, p.transpiled, upgradeable).into_owned()),
        );

        let header = if parents.is_empty() {
            format!("contract {} {{", model.name())
        } else {
            format!("contract {} is {} {{", model.name(), parents.join(", "))
        };
        self.line(0, &header);
    }

    pub(super) fn emit_declarations(&mut self) {
        let model = self.model;
        let mut declarations = model.registry().declarations().peekable();
        if declarations.peek().is_none() {
            return;
        }

        self.begin_block();
        for symbol in declarations {
            for doc in &symbol.doc {
                self.line(1, &format!("/// {doc}"));
            }
            self.line(1, &symbol.payload);
        }
    }

    pub(super) fn emit_plain_variables(&mut self) {
        let model = self.model;
        let variables = model.storage().plain();
        if variables.is_empty() {
            return;
        }

        self.begin_block();
        for var in variables {
            self.line(1, &var.declaration());
        }
    }

    pub(super) fn emit_storage_records(&mut self) {
        let model = self.model;
        let contract = model.name();

        for record in model.storage().records() {
            let Some(names) = model.storage().record_names(&record.namespace, contract) else {
                continue;
            };
            let id = record.id(contract);

            self.begin_block();
            self.line(1, &format!("/// @custom:storage-location erc7201:{id}"));
            self.line(1, &format!("struct {} {{", names.struct_name));
            for field in &record.fields {
                self.line(2, &field.field());
            }
            self.line(1, "}");

            self.begin_block();
            self.line(
                1,
                &format!(
                    "// keccak256(abi.encode(uint256(keccak256(\"{id}\")) - 1)) & ~bytes32(uint256(0xff))"
                ),
            );
            self.line(
                1,
                &format!(
                    "bytes32 private constant {} = {};",
                    names.location,
                    record.slot(contract)
                ),
            );

            self.begin_block();
            self.line(
                1,
                &format!(
                    "function {}() private pure returns ({} storage $) {{",
                    names.getter, names.struct_name
                ),
            );
            self.line(2, "assembly {");
            self.line(3, &format!("$.slot := {}", names.location));
            self.line(2, "}");
            self.line(1, "}");
        }
    }

    pub(super) fn emit_constructor(&mut self) {
        let model = self.model;
        let args = model.constructor().ordered_args(model.parents());
        let invocations: Vec<String> = model
            .parents()
            .iter()
            .filter(|p| !p.args.is_empty())
            .map(|p| format!("{}({})", p.name, render_args(p)))
            .collect();
        let code = model.constructor().code();

        if args.is_empty() && invocations.is_empty() && code.is_empty() {
            return;
        }

        let params: Vec<String> = args.iter().map(|a| a.render()).collect();
        let signature = format!("constructor({})", params.join(", "));

        self.begin_block();
        if invocations.is_empty() {
            self.emit_block(1, &signature, code);
            return;
        }

        self.line(1, &signature);
        for invocation in &invocations {
            self.line(2, invocation);
        }
        if code.is_empty() {
            self.line(1, "{}");
        } else {
            self.line(1, "{");
            for stmt in code {
                self.line(2, stmt);
            }
            self.line(1, "}");
        }
    }

    pub(super) fn emit_initializer(&mut self) {
        let model = self.model;

        self.begin_block();
        self.line(1, "/// @custom:oz-upgrades-unsafe-allow constructor");
        self.line(1, "constructor() {");
        self.line(2, "_disableInitializers();");
        self.line(1, "}");

        let args = model.constructor().ordered_args(model.parents());
        let mut body: Vec<String> = model
            .parents()
            .iter()
            .filter(|p| p.transpiled)
            .map(|p| format!("{}({});", init_function(&p.name), render_args(p)))
            .collect();
        body.extend(model.constructor().code().iter().cloned());

        if args.is_empty() && body.is_empty() {
            return;
        }

        let params: Vec<String> = args.iter().map(|a| a.render()).collect();
        let header = format!(
            "function initialize({}) public initializer",
            params.join(", ")
        );
        self.begin_block();
        self.emit_block(1, &header, &body);
    }

    pub(super) fn emit_functions(&mut self) {
        let model = self.model;
        for entry in model.functions().iter() {
            if entry.is_pass_through() && entry.storage.is_empty() {
                continue;
            }
            self.emit_function(entry);
        }
    }

    fn emit_function(&mut self, entry: &FunctionEntry) {
        let model = self.model;
        let def = &entry.def;
        let upgradeable = model.is_upgradeable();

        let args: Vec<String> = def
            .args
            .iter()
            .map(|a| {
                if a.name.is_empty() {
                    a.ty.clone()
                } else {
                    format!("{} {}", a.ty, a.name)
                }
            })
            .collect();

        let mut header = format!("function {}({}) {}", def.name, args.join(", "), def.kind.as_str());
        if let Some(keyword) = def.mutability.keyword() {
            header.push(' ');
            header.push_str(keyword);
        }
        for modifier in &entry.modifiers {
            header.push(' ');
            header.push_str(modifier);
        }
        match entry.overrides.len() {
            0 => {}
            1 => header.push_str(" override"),
            _ => {
                let targets: Vec<String> = entry
                    .overrides
                    .iter()
                    .map(|(name, transpiled)| {
                        emitted_name(name, *transpiled, upgradeable).into_owned()
                    })
                    .collect();
                header.push_str(&format!(" override({})", targets.join(", ")));
            }
        }
        if !def.returns.is_empty() {
            header.push_str(&format!(" returns ({})", def.returns.join(", ")));
        }

        let mut body = Vec::new();
        for namespace in &entry.storage {
            if let Some(names) = model.storage().record_names(namespace, model.name()) {
                body.push(format!(
                    "{} storage {} = {}();",
                    names.struct_name, names.var, names.getter
                ));
            }
        }
        match &entry.body {
            Some(lines) => body.extend(lines.iter().cloned()),
            None => {
                body.extend(entry.code.iter().cloned());
                if !entry.overrides.is_empty() {
                    body.push(super_call(entry));
                }
            }
        }

        self.begin_block();
        for doc in &entry.doc {
            self.line(1, &format!("/// {doc}"));
        }
        self.emit_block(1, &header, &body);
    }

    /// `header {}` when empty, otherwise a braced block of statements.
    fn emit_block(&mut self, depth: usize, header: &str, body: &[String]) {
        if body.is_empty() {
            self.line(depth, &format!("{header} {{}}"));
            return;
        }
        self.line(depth, &format!("{header} {{"));
        for stmt in body {
            self.line(depth + 1, stmt);
        }
        self.line(depth, "}");
    }
}

fn import_line(name: &str, path: &str) -> String {
    format!("import {{{name}}} from \"{path}\";")
}

fn render_args(parent: &ParentReference) -> String {
    parent
        .args
        .iter()
        .map(ParentArg::render)
        .collect::<Vec<_>>()
        .join(", ")
}

fn super_call(entry: &FunctionEntry) -> String {
    let def = &entry.def;
    let args: Vec<&str> = def.args.iter().map(|a| a.name.as_str()).collect();
    let call = format!("super.{}({});", def.name, args.join(", "));
    if def.returns.is_empty() {
        call
    } else {
        format!("return {call}")
    }
}
