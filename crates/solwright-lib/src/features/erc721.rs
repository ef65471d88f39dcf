//! Non-fungible tokens.

use solwright_core::Catalog;
use solwright_core::utils::escape_string_literal;

use crate::model::{ContractModel, FunctionDef, FunctionKind, Mutability, ParentArg, StateVariable};
use crate::Result;

use super::access::require_access_control;
use super::{CommonOptions, add_overrides, apply_common, base, new_model, pausable};

pub const NEXT_TOKEN_ID: &str = "_nextTokenId";

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc721Options {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub enumerable: bool,
    pub uri_storage: bool,
    pub burnable: bool,
    pub pausable: bool,
    pub mintable: bool,
    /// Mint with sequential ids instead of caller-chosen ones.
    pub incremental: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for Erc721Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            base_uri: String::new(),
            enumerable: false,
            uri_storage: false,
            burnable: false,
            pausable: false,
            mintable: false,
            incremental: false,
            common: CommonOptions::default(),
        }
    }
}

pub fn update() -> FunctionDef {
    FunctionDef::new("_update")
        .arg("to", "address")
        .arg("tokenId", "uint256")
        .arg("auth", "address")
        .kind(FunctionKind::Internal)
        .returns("address")
}

pub fn increase_balance() -> FunctionDef {
    FunctionDef::new("_increaseBalance")
        .arg("account", "address")
        .arg("value", "uint128")
        .kind(FunctionKind::Internal)
}

pub fn supports_interface() -> FunctionDef {
    FunctionDef::new("supportsInterface")
        .arg("interfaceId", "bytes4")
        .mutability(Mutability::View)
        .returns("bool")
}

pub fn token_uri() -> FunctionDef {
    FunctionDef::new("tokenURI")
        .arg("tokenId", "uint256")
        .mutability(Mutability::View)
        .returns("string memory")
}

pub fn base_uri() -> FunctionDef {
    FunctionDef::new("_baseURI")
        .kind(FunctionKind::Internal)
        .mutability(Mutability::Pure)
        .returns("string memory")
}

pub fn build_erc721(opts: &Erc721Options, catalog: &Catalog) -> Result<ContractModel> {
    let mut model = new_model(&opts.name, &opts.common)?;
    let access = opts.common.access;

    let erc721 = base(catalog, "ERC721")?
        .arg(ParentArg::literal(&opts.name))
        .arg(ParentArg::literal(&opts.symbol));
    model.add_parent(erc721.clone())?;

    let mut update_targets = vec![erc721.clone()];
    let mut increase_balance_targets = vec![erc721.clone()];
    let mut token_uri_targets = vec![erc721.clone()];
    let mut supports_interface_targets = vec![erc721.clone()];

    if !opts.base_uri.is_empty() {
        let function = model.add_function(base_uri())?;
        model.add_override(&erc721, function)?;
        model.set_function_body(
            function,
            vec![format!("return \"{}\";", escape_string_literal(&opts.base_uri))],
        )?;
    }

    if opts.enumerable {
        let enumerable = base(catalog, "ERC721Enumerable")?;
        model.add_parent(enumerable.clone())?;
        update_targets.push(enumerable.clone());
        increase_balance_targets.push(enumerable.clone());
        supports_interface_targets.push(enumerable);
    }

    if opts.uri_storage {
        let uri_storage = base(catalog, "ERC721URIStorage")?;
        model.add_parent(uri_storage.clone())?;
        token_uri_targets.push(uri_storage.clone());
        supports_interface_targets.push(uri_storage);
    }

    if opts.pausable {
        let erc721_pausable = base(catalog, "ERC721Pausable")?;
        model.add_parent(erc721_pausable.clone())?;
        update_targets.push(erc721_pausable);
        pausable::add_pause_functions(&mut model, catalog, access)?;
    }

    if opts.burnable {
        model.add_parent(base(catalog, "ERC721Burnable")?)?;
    }

    if opts.mintable {
        add_mintable(&mut model, catalog, opts)?;
    }

    apply_common(&mut model, catalog, &opts.common)?;
    if model.parents().contains("AccessControl") {
        supports_interface_targets.push(base(catalog, "AccessControl")?);
    }

    add_overrides(&mut model, update(), &update_targets)?;
    add_overrides(&mut model, increase_balance(), &increase_balance_targets)?;
    add_overrides(&mut model, token_uri(), &token_uri_targets)?;
    add_overrides(&mut model, supports_interface(), &supports_interface_targets)?;
    Ok(model)
}

fn add_mintable(model: &mut ContractModel, catalog: &Catalog, opts: &Erc721Options) -> Result<()> {
    let mut def = FunctionDef::new("safeMint").arg("to", "address");
    if !opts.incremental {
        def = def.arg("tokenId", "uint256");
    }
    if opts.uri_storage {
        def = def.arg("uri", "string memory");
    }
    if opts.incremental {
        def = def.returns("uint256");
    }

    let function = model.add_function(def)?;
    require_access_control(model, catalog, function, opts.common.access, "MINTER", "minter")?;

    let mut body = Vec::new();
    if opts.incremental {
        model.add_variable(StateVariable::new(NEXT_TOKEN_ID, "uint256"))?;
        let next = model.storage_access(function, NEXT_TOKEN_ID)?;
        body.push(format!("uint256 tokenId = {next}++;"));
    }
    body.push("_safeMint(to, tokenId);".to_string());
    if opts.uri_storage {
        body.push("_setTokenURI(tokenId, uri);".to_string());
    }
    if opts.incremental {
        body.push("return tokenId;".to_string());
    }
    model.set_function_body(function, body)
}
