//! Query error types.

use gather_core::{Collection, Lookup};
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur during query execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("{} not found: {lookup}", .collection.record_name())]
    NotFound {
        collection: Collection,
        lookup: Lookup,
    },
}

impl QueryError {
    pub fn not_found(collection: Collection, lookup: Lookup) -> Self {
        Self::NotFound { collection, lookup }
    }

    /// Whether this is a not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
