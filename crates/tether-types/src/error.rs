use thiserror::Error;

/// The caller aborted an operation through its [`ProgressMonitor`].
///
/// [`ProgressMonitor`]: crate::monitor::ProgressMonitor
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("operation cancelled")]
pub struct CancelledError;
