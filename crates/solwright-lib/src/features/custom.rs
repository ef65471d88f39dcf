//! A plain contract with only the shared features.

use solwright_core::Catalog;

use crate::model::ContractModel;
use crate::Result;

use super::{CommonOptions, apply_common, new_model, pausable};

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomOptions {
    pub name: String,
    pub pausable: bool,
    #[serde(flatten)]
    pub common: CommonOptions,
}

impl Default for CustomOptions {
    fn default() -> Self {
        Self {
            name: "MyContract".to_string(),
            pausable: false,
            common: CommonOptions::default(),
        }
    }
}

pub fn build_custom(opts: &CustomOptions, catalog: &Catalog) -> Result<ContractModel> {
    let mut model = new_model(&opts.name, &opts.common)?;

    if opts.pausable {
        pausable::add_pausable(&mut model, catalog, opts.common.access, &[])?;
    }

    apply_common(&mut model, catalog, &opts.common)?;
    Ok(model)
}
