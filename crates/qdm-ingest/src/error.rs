//! Intake error types.

use std::path::PathBuf;
use thiserror::Error;

/// Data intake error.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file could not be opened or read.
    #[error("failed to read source file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV content could not be parsed.
    #[error("failed to parse CSV file: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Supplied JSON text failed validation.
    ///
    /// Raised only by the strict intake path; the best-effort preview path
    /// degrades to an empty row set instead.
    #[error("invalid JSON input")]
    InvalidJson(#[source] serde_json::Error),
}

/// Result type alias for intake operations.
pub type Result<T> = std::result::Result<T, IngestError>;
