//! Contract-level metadata.

use crate::model::ContractModel;
use crate::Result;

pub const SECURITY_CONTACT_TAG: &str = "@custom:security-contact";

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Info {
    pub security_contact: Option<String>,
    pub license: Option<String>,
}

pub fn set_info(model: &mut ContractModel, info: &Info) -> Result<()> {
    if let Some(contact) = info.security_contact.as_deref().filter(|c| !c.is_empty()) {
        model.add_natspec_tag(SECURITY_CONTACT_TAG, contact)?;
    }
    if let Some(license) = info.license.as_deref().filter(|l| !l.is_empty()) {
        model.set_license(license)?;
    }
    Ok(())
}
