use thiserror::Error;

/// Errors from URL resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The URL string cannot be parsed.
    #[error("malformed URL: {url}: {reason}")]
    Malformed { url: String, reason: String },

    /// The URL's scheme is not supported by this dispatcher.
    #[error("unsupported URL scheme {scheme:?}: {url}")]
    UnsupportedScheme { url: String, scheme: String },

    /// The URL does not address an existing entry.
    #[error("no entry found at URL: {url}")]
    NotFound { url: String },

    /// I/O failure while locating the addressed entry.
    #[error("I/O error resolving {url}: {reason}")]
    Io { url: String, reason: String },
}

/// Result alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
