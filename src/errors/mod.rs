//! Error handling module for the roster engine.
//!
//! Storage errors are recovered by the collection store (logged, never surfaced to the UI).
//! Validation problems are plain data (`editor::ValidationResult`), not errors.

use thiserror::Error;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const STORAGE_IO: &str = "STORAGE_IO";
    pub const STORAGE_FORMAT: &str = "STORAGE_FORMAT";
    pub const INVALID_SNAPSHOT: &str = "INVALID_SNAPSHOT";
    pub const IDS_EXHAUSTED: &str = "IDS_EXHAUSTED";
}

/// Failure of the key-value storage medium or of the snapshot encoding.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The snapshot could not be encoded or decoded
    #[error("snapshot format error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The snapshot decoded but breaks the id invariants
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl StorageError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io(_) => codes::STORAGE_IO,
            StorageError::Serialization(_) => codes::STORAGE_FORMAT,
            StorageError::InvalidSnapshot(_) => codes::INVALID_SNAPSHOT,
        }
    }
}

/// Recoverable outcome of a collection store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No employee with the given id exists in the canonical list
    #[error("employee {0} not found")]
    NotFound(u64),
    /// The largest id in the list leaves no room for another one
    #[error("no employee id available after {0}")]
    IdsExhausted(u64),
}

impl StoreError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => codes::NOT_FOUND,
            StoreError::IdsExhausted(_) => codes::IDS_EXHAUSTED,
        }
    }
}
