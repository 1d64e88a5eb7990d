//! Store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Mapping store operation error.
///
/// Only backend I/O and serialization can fail; a malformed persisted blob is
/// not an error (the store recovers by treating it as an empty list).
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error from a storage backend.
    #[error("failed to {operation} store file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the normalized record list failed.
    #[error("failed to serialize mapping records")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
