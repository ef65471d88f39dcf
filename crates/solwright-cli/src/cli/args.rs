//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Arg, ArgAction, value_parser};
use solwright_lib::features::{Access, Upgradeable};

/// Contract name (--name).
pub fn name_arg(default: &'static str) -> Arg {
    Arg::new("name")
        .long("name")
        .value_name("NAME")
        .default_value(default)
        .help("Contract name (sanitized into an identifier)")
}

/// Token symbol (--symbol).
pub fn symbol_arg() -> Arg {
    Arg::new("symbol")
        .long("symbol")
        .value_name("SYMBOL")
        .default_value("MTK")
        .help("Token symbol")
}

/// A boolean feature toggle (--<long>).
pub fn flag_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(long).action(ArgAction::SetTrue).help(help)
}

/// Access control mode (--access).
pub fn access_arg() -> Arg {
    Arg::new("access")
        .long("access")
        .value_name("MODE")
        .value_parser(
            PossibleValuesParser::new(Access::ALL.map(Access::as_str))
                .try_map(|s| s.parse::<Access>()),
        )
        .help("Access control for restricted functions")
}

/// Upgradeability mode (--upgradeable).
pub fn upgradeable_arg() -> Arg {
    Arg::new("upgradeable")
        .long("upgradeable")
        .value_name("MODE")
        .value_parser(
            PossibleValuesParser::new(Upgradeable::ALL.map(Upgradeable::as_str))
                .try_map(|s| s.parse::<Upgradeable>()),
        )
        .help("Make the contract upgradeable behind a proxy")
}

/// Security contact natspec tag (--security-contact).
pub fn security_contact_arg() -> Arg {
    Arg::new("security_contact")
        .long("security-contact")
        .value_name("CONTACT")
        .help("Email or URL for vulnerability reports")
}

/// SPDX license identifier (--license).
pub fn license_arg() -> Arg {
    Arg::new("license")
        .long("license")
        .value_name("SPDX")
        .help("SPDX license identifier [default: MIT]")
}

/// Custom catalog of base contracts (--catalog).
pub fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON catalog of base contracts (defaults to OpenZeppelin)")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the contract to FILE instead of stdout")
}

/// Compiler version requirement (--pragma).
pub fn pragma_arg() -> Arg {
    Arg::new("pragma")
        .long("pragma")
        .value_name("VERSION")
        .help("Version requirement for `pragma solidity` [default: ^0.8.27]")
}

/// Options file (positional).
pub fn options_path_arg() -> Arg {
    Arg::new("options_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON options file with a `kind` field")
}

/// Log verbosity (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace)")
}
