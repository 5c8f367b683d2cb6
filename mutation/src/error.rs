//! Mutation error types.

use gather_core::{Collection, Lookup};
use gather_store::StoreError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
#[derive(Debug, Error)]
pub enum MutationError {
    /// No record matched the update or delete.
    #[error("{} not found: {lookup}", .collection.record_name())]
    NotFound {
        collection: Collection,
        lookup: Lookup,
    },

    /// Store rejected a positional write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl MutationError {
    pub fn not_found(collection: Collection, lookup: Lookup) -> Self {
        Self::NotFound { collection, lookup }
    }

    /// Whether this is a not-found outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
