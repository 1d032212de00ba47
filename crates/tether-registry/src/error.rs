use tether_types::{CancelledError, ContentType, Version};
use thiserror::Error;

/// Errors from handler registry operations and type validation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A handler for this content type is already registered.
    #[error("handler already registered for content type: {content_type}")]
    DuplicateHandler { content_type: ContentType },

    /// No handler is registered for this content type.
    #[error("no handler registered for content type: {content_type}")]
    UnknownContentType { content_type: ContentType },

    /// A resolved object's runtime type disagrees with the expected type.
    #[error("content type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors reported by a target domain file when asked for its content.
#[derive(Debug, Error)]
pub enum FileError {
    /// The requested version cannot be read by this implementation.
    #[error("incompatible version {requested}: {reason}")]
    VersionIncompatible { requested: Version, reason: String },

    /// The caller cancelled the operation through its monitor.
    #[error(transparent)]
    Cancelled(#[from] CancelledError),

    /// I/O failure while reading the file's content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for domain-file operations.
pub type FileResult<T> = Result<T, FileError>;
