use std::sync::Arc;

use tether_types::ProgressMonitor;
use tracing::debug;
use url::Url;

use crate::error::{ResolveError, ResolveResult};
use crate::outcome::QueryOutcome;
use crate::traits::{Located, UrlBackend};

/// Parse a link-target URL string.
pub fn parse_url(s: &str) -> ResolveResult<Url> {
    Url::parse(s).map_err(|e| ResolveError::Malformed {
        url: s.to_string(),
        reason: e.to_string(),
    })
}

/// Resolves a URL to the target file it addresses.
///
/// The dispatcher owns the supported-scheme set and the cancellation
/// discipline: the monitor is polled at the dispatch boundary and again
/// before the backend lookup, so a cancelled call never reaches I/O.
/// Everything after that is the backend's answer, folded into a single
/// [`QueryOutcome`].
pub struct UrlQueryDispatcher {
    backend: Arc<dyn UrlBackend>,
    schemes: Vec<String>,
}

impl UrlQueryDispatcher {
    /// Create a dispatcher over `backend` accepting the given URL schemes.
    pub fn new(backend: Arc<dyn UrlBackend>, schemes: impl IntoIterator<Item = String>) -> Self {
        Self {
            backend,
            schemes: schemes.into_iter().collect(),
        }
    }

    /// Returns `true` if the dispatcher accepts this URL scheme.
    pub fn supports_scheme(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s == scheme)
    }

    /// Resolve `url` to exactly one [`QueryOutcome`].
    ///
    /// Synchronous: returns only once resolution has definitively succeeded
    /// or failed. A cancelled call does no backend work.
    pub fn resolve(&self, url: &Url, monitor: &ProgressMonitor) -> QueryOutcome {
        if monitor.is_cancelled() {
            return QueryOutcome::Cancelled;
        }

        if !self.supports_scheme(url.scheme()) {
            return QueryOutcome::Failed(ResolveError::UnsupportedScheme {
                url: url.to_string(),
                scheme: url.scheme().to_string(),
            });
        }

        // Last poll before the (possibly remote) lookup.
        if monitor.is_cancelled() {
            return QueryOutcome::Cancelled;
        }

        debug!(url = %url, "dispatching URL query");
        match self.backend.locate(url) {
            Ok(Located::Found(file)) => QueryOutcome::Resolved(file),
            Ok(Located::Unauthorized) => QueryOutcome::Unauthorized,
            Ok(Located::Missing) => QueryOutcome::Failed(ResolveError::NotFound {
                url: url.to_string(),
            }),
            Err(err) => QueryOutcome::Failed(err),
        }
    }
}

impl std::fmt::Debug for UrlQueryDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlQueryDispatcher")
            .field("schemes", &self.schemes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryUrlBackend;
    use std::any::TypeId;
    use std::collections::HashMap;
    use tether_registry::{DomainFile, DomainObject, FileResult};
    use tether_types::{ConsumerId, ContentType, Version};

    struct FakeObject {
        content_type: ContentType,
    }

    impl DomainObject for FakeObject {
        fn name(&self) -> &str {
            "fake"
        }

        fn content_type(&self) -> &ContentType {
            &self.content_type
        }

        fn type_name(&self) -> &'static str {
            std::any::type_name::<Self>()
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    struct FakeFile {
        path: String,
        content_type: ContentType,
    }

    impl FakeFile {
        fn new(path: &str) -> Arc<Self> {
            Arc::new(Self {
                path: path.to_string(),
                content_type: ContentType::new("Notebook"),
            })
        }
    }

    impl DomainFile for FakeFile {
        fn path_name(&self) -> &str {
            &self.path
        }

        fn content_type(&self) -> &ContentType {
            &self.content_type
        }

        fn metadata(&self) -> HashMap<String, String> {
            HashMap::new()
        }

        fn domain_object_type(&self) -> TypeId {
            TypeId::of::<FakeObject>()
        }

        fn domain_object_type_name(&self) -> &'static str {
            "FakeObject"
        }

        fn get_read_only_object(
            &self,
            _consumer: ConsumerId,
            _version: Version,
            _monitor: &ProgressMonitor,
        ) -> FileResult<Arc<dyn DomainObject>> {
            Ok(Arc::new(FakeObject {
                content_type: self.content_type.clone(),
            }))
        }

        fn get_immutable_object(
            &self,
            _consumer: ConsumerId,
            _version: Version,
            _monitor: &ProgressMonitor,
        ) -> FileResult<Arc<dyn DomainObject>> {
            Ok(Arc::new(FakeObject {
                content_type: self.content_type.clone(),
            }))
        }
    }

    fn dispatcher(backend: Arc<InMemoryUrlBackend>) -> UrlQueryDispatcher {
        UrlQueryDispatcher::new(backend, ["tether".to_string()])
    }

    #[test]
    fn parse_url_accepts_well_formed() {
        let url = parse_url("tether://host/repo/obj1").unwrap();
        assert_eq!(url.scheme(), "tether");
    }

    #[test]
    fn parse_url_rejects_malformed() {
        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err, ResolveError::Malformed { .. }));
    }

    #[test]
    fn resolve_known_url() {
        let backend = Arc::new(InMemoryUrlBackend::new());
        backend.insert("tether://host/repo/obj1", FakeFile::new("/repo/obj1"));

        let url = parse_url("tether://host/repo/obj1").unwrap();
        let outcome = dispatcher(backend).resolve(&url, &ProgressMonitor::new());
        assert!(outcome.is_resolved());
        match outcome {
            QueryOutcome::Resolved(file) => assert_eq!(file.path_name(), "/repo/obj1"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn resolve_missing_url_fails() {
        let backend = Arc::new(InMemoryUrlBackend::new());
        let url = parse_url("tether://host/repo/missing").unwrap();
        let outcome = dispatcher(backend).resolve(&url, &ProgressMonitor::new());
        assert!(!outcome.is_resolved());
        assert!(matches!(
            outcome,
            QueryOutcome::Failed(ResolveError::NotFound { .. })
        ));
    }

    #[test]
    fn resolve_denied_url_is_unauthorized() {
        let backend = Arc::new(InMemoryUrlBackend::new());
        backend.insert("tether://host/repo/secret", FakeFile::new("/repo/secret"));
        backend.deny("tether://host/repo/secret");

        let url = parse_url("tether://host/repo/secret").unwrap();
        let outcome = dispatcher(backend).resolve(&url, &ProgressMonitor::new());
        assert!(matches!(outcome, QueryOutcome::Unauthorized));
    }

    #[test]
    fn unsupported_scheme_is_rejected_before_lookup() {
        let backend = Arc::new(InMemoryUrlBackend::new());
        backend.insert("ftp://host/repo/obj1", FakeFile::new("/repo/obj1"));

        let url = parse_url("ftp://host/repo/obj1").unwrap();
        let outcome = dispatcher(backend).resolve(&url, &ProgressMonitor::new());
        assert!(matches!(
            outcome,
            QueryOutcome::Failed(ResolveError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn cancelled_monitor_short_circuits() {
        let backend = Arc::new(InMemoryUrlBackend::new());
        backend.insert("tether://host/repo/obj1", FakeFile::new("/repo/obj1"));

        let monitor = ProgressMonitor::new();
        monitor.cancel();
        let url = parse_url("tether://host/repo/obj1").unwrap();
        let outcome = dispatcher(backend).resolve(&url, &monitor);
        assert!(matches!(outcome, QueryOutcome::Cancelled));
    }
}
