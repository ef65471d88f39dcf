//! Configuration for Solidity emission.

/// Configuration for Solidity emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// SPDX identifier used when the model does not set one
    pub(crate) license: String,
    /// Version requirement for the `pragma solidity` line
    pub(crate) pragma: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            license: "MIT".to_string(),
            pragma: "^0.8.27".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback SPDX license identifier.
    pub fn license(mut self, value: impl Into<String>) -> Self {
        self.license = value.into();
        self
    }

    /// Set the compiler version requirement.
    pub fn pragma(mut self, value: impl Into<String>) -> Self {
        self.pragma = value.into();
        self
    }
}
