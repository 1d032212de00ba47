use std::fmt;
use std::sync::Arc;

use tether_registry::DomainFile;

use crate::error::ResolveError;

/// The single, definitive outcome of one resolution call.
///
/// A resolution is observed only in fully-resolved or fully-failed form;
/// there is no partial state and no mid-flight error delivery.
pub enum QueryOutcome {
    /// The URL addresses an existing, readable target file.
    Resolved(Arc<dyn DomainFile>),
    /// The caller is not authorized to read the addressed entry.
    Unauthorized,
    /// Resolution failed terminally (malformed URL, missing entry, I/O).
    Failed(ResolveError),
    /// The caller cancelled before resolution completed.
    Cancelled,
}

impl QueryOutcome {
    /// Returns `true` if the outcome carries a resolved target.
    pub fn is_resolved(&self) -> bool {
        matches!(self, QueryOutcome::Resolved(_))
    }
}

impl fmt::Debug for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Resolved(file) => write!(f, "Resolved({})", file.path_name()),
            QueryOutcome::Unauthorized => f.write_str("Unauthorized"),
            QueryOutcome::Failed(err) => write!(f, "Failed({err})"),
            QueryOutcome::Cancelled => f.write_str("Cancelled"),
        }
    }
}
