//! Command builders for the CLI.

use clap::{Arg, Command};

use super::args::*;

/// Shared feature and output args for every generating command.
fn with_common_args(cmd: Command) -> Command {
    cmd.arg(access_arg())
        .arg(upgradeable_arg())
        .arg(security_contact_arg())
        .arg(license_arg())
        .arg(output_arg())
}

/// Args that control where and how the contract is written.
fn with_emit_args(cmd: Command) -> Command {
    cmd.arg(catalog_arg()).arg(pragma_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("solwright")
        .about("Composable smart contract generator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(custom_command())
        .subcommand(erc20_command())
        .subcommand(erc721_command())
        .subcommand(options_command())
}

/// Plain contract with shared features.
pub fn custom_command() -> Command {
    let cmd = Command::new("custom")
        .about("Generate a plain contract")
        .arg(name_arg("MyContract"))
        .arg(flag_arg("pausable", "pausable", "Add emergency pause"));
    with_emit_args(with_common_args(cmd))
}

/// Fungible token.
pub fn erc20_command() -> Command {
    let cmd = Command::new("erc20")
        .about("Generate an ERC20 token")
        .after_help(
            r#"EXAMPLES:
  solwright erc20 --name Gold --symbol GLD --mintable
  solwright erc20 --premint 1000 --votes --access roles
  solwright erc20 --pausable --upgradeable uups -o Token.sol"#,
        )
        .arg(name_arg("MyToken"))
        .arg(symbol_arg())
        .arg(flag_arg("burnable", "burnable", "Let holders destroy their tokens"))
        .arg(flag_arg("pausable", "pausable", "Add emergency pause"))
        .arg(
            Arg::new("premint")
                .long("premint")
                .value_name("AMOUNT")
                .help("Tokens minted to the deployer-chosen recipient, e.g. 1000 or 0.5"),
        )
        .arg(flag_arg("mintable", "mintable", "Allow privileged minting"))
        .arg(flag_arg("no_permit", "no-permit", "Leave out ERC20Permit"))
        .arg(flag_arg("votes", "votes", "Add ERC20Votes delegation"));
    with_emit_args(with_common_args(cmd))
}

/// Non-fungible token.
pub fn erc721_command() -> Command {
    let cmd = Command::new("erc721")
        .about("Generate an ERC721 token")
        .arg(name_arg("MyToken"))
        .arg(symbol_arg())
        .arg(
            Arg::new("base_uri")
                .long("base-uri")
                .value_name("URI")
                .help("Prefix for token URIs"),
        )
        .arg(flag_arg("enumerable", "enumerable", "Track tokens on-chain"))
        .arg(flag_arg("uri_storage", "uri-storage", "Store a URI per token"))
        .arg(flag_arg("burnable", "burnable", "Let holders destroy their tokens"))
        .arg(flag_arg("pausable", "pausable", "Add emergency pause"))
        .arg(flag_arg("mintable", "mintable", "Allow privileged minting"))
        .arg(flag_arg(
            "incremental",
            "incremental",
            "Assign sequential token ids when minting",
        ));
    with_emit_args(with_common_args(cmd))
}

/// Any contract kind, described by a JSON file.
pub fn options_command() -> Command {
    let cmd = Command::new("options")
        .about("Generate a contract from a JSON options file")
        .after_help(
            r#"EXAMPLES:
  solwright options token.json
  echo '{"kind": "ERC20", "name": "Gold", "symbol": "GLD"}' > gold.json && solwright options gold.json"#,
        )
        .arg(options_path_arg())
        .arg(output_arg());
    with_emit_args(cmd)
}
