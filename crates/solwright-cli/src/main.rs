mod cli;
mod commands;

use cli::{CustomParams, Erc20Params, Erc721Params, OptionsParams, build_cli};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "SOLWRIGHT_LOG";

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("custom", m)) => {
            let params = CustomParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("erc20", m)) => {
            let params = Erc20Params::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("erc721", m)) => {
            let params = Erc721Params::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("options", m)) => {
            let params = OptionsParams::from_matches(m);
            commands::generate::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr so stdout carries only contract source.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
