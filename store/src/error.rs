//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or mutating a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Index outside the table bounds.
    #[error("Index {index} out of range for {collection} (len {len})")]
    IndexOutOfRange {
        collection: gather_core::Collection,
        index: usize,
        len: usize,
    },

    /// Failed to read a dataset file.
    #[error("failed to read dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset is not valid JSON of the expected shape.
    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn index_out_of_range(collection: gather_core::Collection, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            collection,
            index,
            len,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
