//! REPL errors.

use std::path::PathBuf;

use gather_store::StoreError;
use thiserror::Error;

/// Failures the REPL reports outside of a GraphQL response.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReplError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

pub type ReplResult<T> = Result<T, ReplError>;
