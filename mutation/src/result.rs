//! Mutation result types.

use serde::Serialize;

/// Result of clearing a whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeleteAllSummary {
    /// Number of records removed.
    pub count: usize,
}

impl DeleteAllSummary {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}
