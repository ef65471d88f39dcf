//! Fungible tokens.

use solwright_core::Catalog;

use crate::model::{
    ConstructorArg, ContractModel, FunctionDef, FunctionKind, Mutability, Owner, ParentArg,
};
use crate::{Error, Result};

use super::access::require_access_control;
use super::{CommonOptions, add_overrides, apply_common, base, new_model, pausable};

/// Decimal places beyond which a premint amount cannot be represented.
const MAX_DECIMALS: usize = 18;

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Erc20Options {
    pub name: String,
    pub symbol: String,
    pub burnable: bool,
    pub pausable: bool,
    /// Tokens minted to `recipient` at deployment, as a decimal string.
    pub premint: Option<String>,
    pub mintable: bool,
    pub permit: bool,
    pub votes: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for Erc20Options {
    fn default() -> Self {
        Self {
            name: "MyToken".to_string(),
            symbol: "MTK".to_string(),
            burnable: false,
            pausable: false,
            premint: None,
            mintable: false,
            permit: true,
            votes: false,
            common: CommonOptions::default(),
        }
    }
}

pub fn update() -> FunctionDef {
    FunctionDef::new("_update")
        .arg("from", "address")
        .arg("to", "address")
        .arg("value", "uint256")
        .kind(FunctionKind::Internal)
}

pub fn nonces() -> FunctionDef {
    FunctionDef::new("nonces")
        .arg("owner", "address")
        .mutability(Mutability::View)
        .returns("uint256")
}

pub fn mint() -> FunctionDef {
    FunctionDef::new("mint")
        .arg("to", "address")
        .arg("amount", "uint256")
}

pub fn build_erc20(opts: &Erc20Options, catalog: &Catalog) -> Result<ContractModel> {
    let mut model = new_model(&opts.name, &opts.common)?;
    let access = opts.common.access;

    let erc20 = base(catalog, "ERC20")?
        .arg(ParentArg::literal(&opts.name))
        .arg(ParentArg::literal(&opts.symbol));
    model.add_parent(erc20.clone())?;
    let mut update_targets = vec![erc20];
    let mut nonces_targets = Vec::new();

    if opts.burnable {
        model.add_parent(base(catalog, "ERC20Burnable")?)?;
    }

    if opts.pausable {
        let erc20_pausable = base(catalog, "ERC20Pausable")?;
        model.add_parent(erc20_pausable.clone())?;
        update_targets.push(erc20_pausable);
        pausable::add_pause_functions(&mut model, catalog, access)?;
    }

    if let Some(premint) = opts.premint.as_deref() {
        add_premint(&mut model, premint)?;
    }

    if opts.mintable {
        let mint = model.add_function(mint())?;
        require_access_control(&mut model, catalog, mint, access, "MINTER", "minter")?;
        model.set_function_body(mint, vec!["_mint(to, amount);".to_string()])?;
    }

    if opts.permit {
        let permit = base(catalog, "ERC20Permit")?.arg(ParentArg::literal(&opts.name));
        model.add_parent(permit)?;
    }

    if opts.votes {
        // EIP712 is a base of ERC20Votes and must precede it.
        if opts.permit {
            nonces_targets.push(base(catalog, "ERC20Permit")?);
            nonces_targets.push(base(catalog, "Nonces")?);
        } else {
            let eip712 = base(catalog, "EIP712")?
                .arg(ParentArg::literal(&opts.name))
                .arg(ParentArg::literal("1"));
            model.add_parent(eip712)?;
        }

        let votes = base(catalog, "ERC20Votes")?;
        model.add_parent(votes.clone())?;
        update_targets.push(votes);
    }

    apply_common(&mut model, catalog, &opts.common)?;

    add_overrides(&mut model, update(), &update_targets)?;
    if !nonces_targets.is_empty() {
        add_overrides(&mut model, nonces(), &nonces_targets)?;
    }
    Ok(model)
}

fn add_premint(model: &mut ContractModel, premint: &str) -> Result<()> {
    let Some(amount) = premint_amount(premint)? else {
        return Ok(());
    };
    model.add_constructor_argument(ConstructorArg::new("recipient", "address"), Owner::Own)?;
    model.add_constructor_code(format!("_mint(recipient, {amount});"))
}

/// Solidity expression for a decimal premint, or `None` when it is zero.
///
/// `"1000"` -> `1000 * 10 ** decimals()`, `"1.5"` -> `15 * 10 ** (decimals() - 1)`.
pub(crate) fn premint_amount(premint: &str) -> Result<Option<String>> {
    let invalid = || Error::InvalidOption {
        option: "premint",
        value: premint.to_string(),
    };

    let trimmed = premint.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(invalid());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > MAX_DECIMALS {
        return Err(invalid());
    }

    let units = format!("{whole}{fraction}");
    let units = units.trim_start_matches('0');
    if units.is_empty() {
        return Ok(None);
    }

    Ok(Some(if fraction.is_empty() {
        format!("{units} * 10 ** decimals()")
    } else {
        format!("{units} * 10 ** (decimals() - {})", fraction.len())
    }))
}
