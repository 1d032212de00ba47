use tether_types::CancelledError;
use thiserror::Error;

/// Errors from folder store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The filename violates the store's naming rules.
    #[error("invalid filename: {name}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The folder path is malformed.
    #[error("invalid folder path: {path}: {reason}")]
    InvalidFolderPath { path: String, reason: String },

    /// An entry with this path and name already exists.
    #[error("entry already exists: {path}")]
    AlreadyExists { path: String },

    /// The requested entry was not found.
    #[error("entry not found: {path}")]
    NotFound { path: String },

    /// The caller cancelled the operation through its monitor.
    #[error(transparent)]
    Cancelled(#[from] CancelledError),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
