//! Emergency stop: `pause()` / `unpause()` guarded by access control.

use solwright_core::Catalog;

use crate::model::{ContractModel, FunctionDef, FunctionId};
use crate::Result;

use super::access::{Access, require_access_control};
use super::base;

pub fn pause() -> FunctionDef {
    FunctionDef::new("pause")
}

pub fn unpause() -> FunctionDef {
    FunctionDef::new("unpause")
}

/// Inherit `Pausable`, guard `guarded` with `whenNotPaused`, and add the
/// pause functions.
pub fn add_pausable(
    model: &mut ContractModel,
    catalog: &Catalog,
    access: Option<Access>,
    guarded: &[FunctionId],
) -> Result<()> {
    model.add_parent(base(catalog, "Pausable")?)?;
    for &function in guarded {
        model.add_modifier(function, "whenNotPaused")?;
    }
    add_pause_functions(model, catalog, access)
}

/// Add restricted `pause()` and `unpause()`. Safe to call more than once.
pub fn add_pause_functions(
    model: &mut ContractModel,
    catalog: &Catalog,
    access: Option<Access>,
) -> Result<()> {
    for (def, call) in [(pause(), "_pause();"), (unpause(), "_unpause();")] {
        let existing = model.functions().find(&def);
        let function = model.add_function(def)?;
        require_access_control(model, catalog, function, access, "PAUSER", "pauser")?;
        if existing.is_none() {
            model.set_function_body(function, vec![call.to_string()])?;
        }
    }
    Ok(())
}
