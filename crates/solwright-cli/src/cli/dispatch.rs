//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap matches
//! - `from_matches()` extractors
//! - `Into<GenerateArgs>` impls that bridge dispatch to the generate command

use std::path::PathBuf;

use clap::ArgMatches;
use solwright_lib::features::{
    Access, CommonOptions, CustomOptions, Erc20Options, Erc721Options, GenericOptions, Info,
    Upgradeable,
};

use crate::commands::generate::{GenerateArgs, OptionsSource};

/// Output settings shared by every command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmitParams {
    pub catalog_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pragma: Option<String>,
}

impl EmitParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            catalog_path: m.get_one::<PathBuf>("catalog").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            pragma: m.get_one::<String>("pragma").cloned(),
        }
    }

    fn into_args(self, options: OptionsSource) -> GenerateArgs {
        GenerateArgs {
            options,
            catalog_path: self.catalog_path,
            output: self.output,
            pragma: self.pragma,
        }
    }
}

fn common_from_matches(m: &ArgMatches) -> CommonOptions {
    CommonOptions {
        access: m.get_one::<Access>("access").copied(),
        upgradeable: m.get_one::<Upgradeable>("upgradeable").copied(),
        info: Info {
            security_contact: m.get_one::<String>("security_contact").cloned(),
            license: m.get_one::<String>("license").cloned(),
        },
    }
}

fn string_arg(m: &ArgMatches, id: &str) -> String {
    m.get_one::<String>(id).cloned().unwrap_or_default()
}

pub struct CustomParams {
    pub options: CustomOptions,
    pub emit: EmitParams,
}

impl CustomParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            options: CustomOptions {
                name: string_arg(m, "name"),
                pausable: m.get_flag("pausable"),
                common: common_from_matches(m),
            },
            emit: EmitParams::from_matches(m),
        }
    }
}

impl From<CustomParams> for GenerateArgs {
    fn from(p: CustomParams) -> Self {
        p.emit
            .into_args(OptionsSource::Inline(GenericOptions::Custom(p.options)))
    }
}

pub struct Erc20Params {
    pub options: Erc20Options,
    pub emit: EmitParams,
}

impl Erc20Params {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            options: Erc20Options {
                name: string_arg(m, "name"),
                symbol: string_arg(m, "symbol"),
                burnable: m.get_flag("burnable"),
                pausable: m.get_flag("pausable"),
                premint: m.get_one::<String>("premint").cloned(),
                mintable: m.get_flag("mintable"),
                permit: !m.get_flag("no_permit"),
                votes: m.get_flag("votes"),
                common: common_from_matches(m),
            },
            emit: EmitParams::from_matches(m),
        }
    }
}

impl From<Erc20Params> for GenerateArgs {
    fn from(p: Erc20Params) -> Self {
        p.emit
            .into_args(OptionsSource::Inline(GenericOptions::Erc20(p.options)))
    }
}

pub struct Erc721Params {
    pub options: Erc721Options,
    pub emit: EmitParams,
}

impl Erc721Params {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            options: Erc721Options {
                name: string_arg(m, "name"),
                symbol: string_arg(m, "symbol"),
                base_uri: string_arg(m, "base_uri"),
                enumerable: m.get_flag("enumerable"),
                uri_storage: m.get_flag("uri_storage"),
                burnable: m.get_flag("burnable"),
                pausable: m.get_flag("pausable"),
                mintable: m.get_flag("mintable"),
                incremental: m.get_flag("incremental"),
                common: common_from_matches(m),
            },
            emit: EmitParams::from_matches(m),
        }
    }
}

impl From<Erc721Params> for GenerateArgs {
    fn from(p: Erc721Params) -> Self {
        p.emit
            .into_args(OptionsSource::Inline(GenericOptions::Erc721(p.options)))
    }
}

pub struct OptionsParams {
    pub options_path: PathBuf,
    pub emit: EmitParams,
}

impl OptionsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            options_path: m
                .get_one::<PathBuf>("options_path")
                .cloned()
                .unwrap_or_default(),
            emit: EmitParams::from_matches(m),
        }
    }
}

impl From<OptionsParams> for GenerateArgs {
    fn from(p: OptionsParams) -> Self {
        p.emit.into_args(OptionsSource::File(p.options_path))
    }
}
