//! Error types for the stores.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The store file is not valid JSON for its record type.
    #[error("corrupt store {path}: {source}")]
    Format {
        /// Path of the store file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// No account for this username.
    #[error("unknown user: {0}")]
    UnknownUser(String),

    /// The user has never saved any progress.
    #[error("no saved progress for {0}")]
    NoProgress(String),
}
