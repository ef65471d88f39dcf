use std::path::{Path, PathBuf};

use solwright_core::{Catalog, CatalogError};
use solwright_lib::Config;
use solwright_lib::features::{GenericOptions, generate_with_config};

/// Where the contract options come from.
#[derive(Debug)]
pub enum OptionsSource {
    Inline(GenericOptions),
    File(PathBuf),
}

#[derive(Debug)]
pub struct GenerateArgs {
    pub options: OptionsSource,
    pub catalog_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pragma: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid options in `{}`: {source}", path.display())]
    Options {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid catalog `{}`: {source}", path.display())]
    Catalog { path: PathBuf, source: CatalogError },

    #[error(transparent)]
    Build(#[from] solwright_lib::Error),

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn execute(args: &GenerateArgs) -> Result<(), GenerateError> {
    let source = render(args)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &source).map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "contract written");
        }
        None => print!("{source}"),
    }
    Ok(())
}

/// Load inputs, build the model and emit it.
pub fn render(args: &GenerateArgs) -> Result<String, GenerateError> {
    let loaded;
    let options = match &args.options {
        OptionsSource::Inline(options) => options,
        OptionsSource::File(path) => {
            loaded = load_options(path)?;
            &loaded
        }
    };

    let custom;
    let catalog = match &args.catalog_path {
        Some(path) => {
            custom = load_catalog(path)?;
            &custom
        }
        None => Catalog::builtin(),
    };

    let mut config = Config::new();
    if let Some(pragma) = &args.pragma {
        config = config.pragma(pragma);
    }

    Ok(generate_with_config(options, catalog, &config)?)
}

fn read(path: &Path) -> Result<String, GenerateError> {
    std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_options(path: &Path) -> Result<GenericOptions, GenerateError> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| GenerateError::Options {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_catalog(path: &Path) -> Result<Catalog, GenerateError> {
    let text = read(path)?;
    tracing::debug!(path = %path.display(), "loading catalog");
    Catalog::from_json(&text).map_err(|source| GenerateError::Catalog {
        path: path.to_path_buf(),
        source,
    })
}
