//! Catalog of known base contracts.
//!
//! Two implementations share one type:
//! - **Built-in** (`Catalog::builtin`): static array, zero runtime init
//! - **Custom** (`Catalog::from_json`): deserialized once at process start
//!
//! A catalog is never mutated after construction; feature code receives it
//! by shared reference.

use std::borrow::Cow;
use std::collections::HashSet;

/// Import prefix of the non-upgradeable OpenZeppelin library.
pub const CONTRACTS_PREFIX: &str = "@openzeppelin/contracts/";

/// Import prefix of the upgradeable OpenZeppelin library.
pub const UPGRADEABLE_PREFIX: &str = "@openzeppelin/contracts-upgradeable/";

/// Descriptor of a base contract that generated code may inherit or import.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BaseContract {
    pub name: Cow<'static, str>,
    pub path: Cow<'static, str>,
    /// Whether an `<Name>Upgradeable` variant exists in the upgradeable library.
    #[serde(default = "default_transpiled")]
    pub transpiled: bool,
}

fn default_transpiled() -> bool {
    true
}

impl BaseContract {
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            path: Cow::Borrowed(path),
            transpiled: true,
        }
    }

    /// Descriptor for a contract that only exists in one form.
    pub const fn fixed(name: &'static str, path: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            path: Cow::Borrowed(path),
            transpiled: false,
        }
    }
}

/// Errors raised while loading a custom catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("catalog entry `{name}` has an empty import path")]
    EmptyPath { name: String },
}

/// Immutable set of base-contract descriptors.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    contracts: Cow<'static, [BaseContract]>,
}

static BUILTIN: Catalog = Catalog {
    contracts: Cow::Borrowed(&[
        BaseContract::new("ERC20", "@openzeppelin/contracts/token/ERC20/ERC20.sol"),
        BaseContract::new(
            "ERC20Burnable",
            "@openzeppelin/contracts/token/ERC20/extensions/ERC20Burnable.sol",
        ),
        BaseContract::new(
            "ERC20Pausable",
            "@openzeppelin/contracts/token/ERC20/extensions/ERC20Pausable.sol",
        ),
        BaseContract::new(
            "ERC20Permit",
            "@openzeppelin/contracts/token/ERC20/extensions/ERC20Permit.sol",
        ),
        BaseContract::new(
            "ERC20Votes",
            "@openzeppelin/contracts/token/ERC20/extensions/ERC20Votes.sol",
        ),
        BaseContract::new("ERC721", "@openzeppelin/contracts/token/ERC721/ERC721.sol"),
        BaseContract::new(
            "ERC721Burnable",
            "@openzeppelin/contracts/token/ERC721/extensions/ERC721Burnable.sol",
        ),
        BaseContract::new(
            "ERC721Enumerable",
            "@openzeppelin/contracts/token/ERC721/extensions/ERC721Enumerable.sol",
        ),
        BaseContract::new(
            "ERC721Pausable",
            "@openzeppelin/contracts/token/ERC721/extensions/ERC721Pausable.sol",
        ),
        BaseContract::new(
            "ERC721URIStorage",
            "@openzeppelin/contracts/token/ERC721/extensions/ERC721URIStorage.sol",
        ),
        BaseContract::new("Ownable", "@openzeppelin/contracts/access/Ownable.sol"),
        BaseContract::new(
            "AccessControl",
            "@openzeppelin/contracts/access/AccessControl.sol",
        ),
        BaseContract::new(
            "AccessManaged",
            "@openzeppelin/contracts/access/manager/AccessManaged.sol",
        ),
        BaseContract::new("Pausable", "@openzeppelin/contracts/utils/Pausable.sol"),
        BaseContract::new("Nonces", "@openzeppelin/contracts/utils/Nonces.sol"),
        BaseContract::new(
            "EIP712",
            "@openzeppelin/contracts/utils/cryptography/EIP712.sol",
        ),
        BaseContract::fixed(
            "Initializable",
            "@openzeppelin/contracts-upgradeable/proxy/utils/Initializable.sol",
        ),
        BaseContract::fixed(
            "UUPSUpgradeable",
            "@openzeppelin/contracts-upgradeable/proxy/utils/UUPSUpgradeable.sol",
        ),
    ]),
};

impl Catalog {
    /// The built-in OpenZeppelin catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load a custom catalog from `{"contracts": [{"name", "path", "transpiled"?}]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for contract in self.contracts.iter() {
            if contract.path.is_empty() {
                return Err(CatalogError::EmptyPath {
                    name: contract.name.to_string(),
                });
            }
            if !seen.insert(contract.name.as_ref()) {
                return Err(CatalogError::DuplicateEntry(contract.name.to_string()));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&BaseContract> {
        self.contracts.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BaseContract> {
        self.contracts.iter()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
