#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared, read-only building blocks for solwright.
//!
//! - **Catalog**: descriptors of known base contracts (name, import path,
//!   whether an upgradeable variant exists). Built-in catalog is a static
//!   array with zero runtime init; custom catalogs deserialize from JSON once.
//! - **Utils**: identifier normalization used when turning user-provided
//!   names into Solidity identifiers.

pub mod catalog;
pub mod utils;

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod utils_tests;

pub use catalog::{BaseContract, Catalog, CatalogError};
