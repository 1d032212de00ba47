use tether_resolve::ResolveError;
use tether_store::StoreError;
use tether_types::{CancelledError, ContentType, Version};
use thiserror::Error;

/// Errors from link creation, introspection, and materialization.
///
/// Failures that can reach a user carry the attempted URL and the
/// expected-vs-actual types, so a broken link can be diagnosed without
/// re-following it. Contract violations (restricted capabilities invoked on
/// a link file) are panics, not variants here.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The entry is not a recognized link file: its content type is not a
    /// registered link type, or the `link.url` metadata key is absent.
    #[error("invalid link file: {content_type}")]
    InvalidLinkFile { content_type: ContentType },

    /// The caller is not authorized to read the link's target.
    #[error("authorization failure resolving link: {url}")]
    Unauthorized { url: String },

    /// The resolved target's type disagrees with the link's declared type.
    #[error("link target type mismatch at {url}: expected {expected}, got {actual}")]
    TypeMismatch {
        url: String,
        expected: String,
        actual: String,
    },

    /// The target reported the requested version as unreadable. Re-raised
    /// verbatim from the target, never retried.
    #[error("link target {url} at version {requested}: {reason}")]
    VersionIncompatible {
        url: String,
        requested: Version,
        reason: String,
    },

    /// URL resolution failed terminally.
    #[error("failed to resolve link {url}")]
    Resolution {
        url: String,
        #[source]
        source: ResolveError,
    },

    /// The caller cancelled the operation through its monitor.
    #[error(transparent)]
    Cancelled(#[from] CancelledError),

    /// The backing store rejected or failed a link-file operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Serialization of the transient link object failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O failure while materializing the target's content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for link operations.
pub type LinkResult<T> = Result<T, LinkError>;
