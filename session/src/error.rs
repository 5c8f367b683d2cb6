//! Session error types.

use gather_core::{Collection, Lookup};
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Query error.
    #[error(transparent)]
    QueryError(#[from] gather_query::QueryError),

    /// Mutation error.
    #[error(transparent)]
    MutationError(#[from] gather_mutation::MutationError),

    /// Dataset could not be loaded.
    #[error("dataset error: {0}")]
    StoreError(#[from] gather_store::StoreError),

    /// An operation produced a different kind of result than its caller asked for.
    #[error("{operation} returned {outcome}, expected {expected}")]
    UnexpectedOutcome {
        operation: &'static str,
        outcome: &'static str,
        expected: &'static str,
    },
}

impl SessionError {
    /// Whether this is a not-found outcome, as opposed to a fault.
    pub fn is_not_found(&self) -> bool {
        match self {
            SessionError::QueryError(e) => e.is_not_found(),
            SessionError::MutationError(e) => e.is_not_found(),
            SessionError::StoreError(_) | SessionError::UnexpectedOutcome { .. } => false,
        }
    }

    /// Collection and lookup of a not-found outcome.
    pub fn not_found(&self) -> Option<(Collection, &Lookup)> {
        match self {
            SessionError::QueryError(gather_query::QueryError::NotFound { collection, lookup })
            | SessionError::MutationError(gather_mutation::MutationError::NotFound {
                collection,
                lookup,
            }) => Some((*collection, lookup)),
            _ => None,
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
