use std::sync::Arc;

use tether_registry::DomainFile;
use url::Url;

use crate::error::ResolveResult;

/// What a backend found at a URL.
pub enum Located {
    /// The URL addresses this target file.
    Found(Arc<dyn DomainFile>),
    /// The addressed entry exists but the caller may not read it.
    Unauthorized,
    /// Nothing exists at the addressed path.
    Missing,
}

/// Lookup transport behind the dispatcher.
///
/// Implementations locate the entry a URL addresses, locally or remotely.
/// They never interpret the entry's content and never block past a
/// definitive answer; cancellation polling stays with the dispatcher.
pub trait UrlBackend: Send + Sync {
    /// Locate the entry addressed by `url`.
    fn locate(&self, url: &Url) -> ResolveResult<Located>;
}
