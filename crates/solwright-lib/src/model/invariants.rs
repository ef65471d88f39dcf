//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::functions::{FunctionEntry, FunctionId, FunctionTable};

impl FunctionTable {
    pub(crate) fn ensure_entry(&mut self, id: FunctionId) -> &mut FunctionEntry {
        self.get_mut(id).unwrap_or_else(|| {
            panic!(
                "FunctionTable: {id:?} not found \
                 (ids are only valid for the model that issued them)"
            )
        })
    }
}
