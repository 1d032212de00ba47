use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tether_types::ContentType;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::handler::ContentHandler;

/// Process-wide mapping from content-type tags to their handlers.
///
/// Built once at startup and injected wherever handlers must be resolved —
/// never looked up ambiently — so tests can supply a substitute registry.
pub struct HandlerRegistry {
    handlers: RwLock<HashMap<ContentType, Arc<dyn ContentHandler>>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a handler for its content type.
    ///
    /// Fails if a handler for that content type is already registered.
    pub fn register(&self, handler: Arc<dyn ContentHandler>) -> RegistryResult<()> {
        let content_type = handler.content_type().clone();
        let mut map = self.handlers.write().expect("lock poisoned");
        if map.contains_key(&content_type) {
            return Err(RegistryError::DuplicateHandler { content_type });
        }
        debug!(content_type = %content_type, "registered content handler");
        map.insert(content_type, handler);
        Ok(())
    }

    /// Look up the handler for a content type.
    ///
    /// Returns `None` if no handler is registered.
    pub fn lookup(&self, content_type: &ContentType) -> Option<Arc<dyn ContentHandler>> {
        let map = self.handlers.read().expect("lock poisoned");
        map.get(content_type).cloned()
    }

    /// Look up the handler for a content type, failing if unregistered.
    pub fn get(&self, content_type: &ContentType) -> RegistryResult<Arc<dyn ContentHandler>> {
        self.lookup(content_type)
            .ok_or_else(|| RegistryError::UnknownContentType {
                content_type: content_type.clone(),
            })
    }

    /// Returns `true` if the content type belongs to a registered link
    /// handler family.
    pub fn is_link_content_type(&self, content_type: &ContentType) -> bool {
        self.lookup(content_type).is_some_and(|h| h.is_link())
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().expect("lock poisoned").is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    struct Notebook;

    struct NotebookHandler {
        content_type: ContentType,
        link: bool,
    }

    impl NotebookHandler {
        fn new(tag: &str, link: bool) -> Arc<Self> {
            Arc::new(Self {
                content_type: ContentType::new(tag),
                link,
            })
        }
    }

    impl ContentHandler for NotebookHandler {
        fn content_type(&self) -> &ContentType {
            &self.content_type
        }

        fn description(&self) -> &str {
            "notebook content"
        }

        fn domain_object_type(&self) -> TypeId {
            TypeId::of::<Notebook>()
        }

        fn domain_object_type_name(&self) -> &'static str {
            "Notebook"
        }

        fn is_link(&self) -> bool {
            self.link
        }
    }

    #[test]
    fn register_and_lookup() {
        let registry = HandlerRegistry::new();
        registry
            .register(NotebookHandler::new("Notebook", false))
            .unwrap();

        let handler = registry.lookup(&ContentType::new("Notebook")).unwrap();
        assert_eq!(handler.domain_object_type_name(), "Notebook");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = HandlerRegistry::new();
        registry
            .register(NotebookHandler::new("Notebook", false))
            .unwrap();
        let err = registry
            .register(NotebookHandler::new("Notebook", false))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateHandler { .. }));
    }

    #[test]
    fn lookup_of_unknown_type_returns_none() {
        let registry = HandlerRegistry::new();
        assert!(registry.lookup(&ContentType::new("Mystery")).is_none());
        assert!(matches!(
            registry.get(&ContentType::new("Mystery")),
            Err(RegistryError::UnknownContentType { .. })
        ));
    }

    #[test]
    fn link_content_type_discrimination() {
        let registry = HandlerRegistry::new();
        registry
            .register(NotebookHandler::new("Notebook", false))
            .unwrap();
        registry
            .register(NotebookHandler::new("NotebookLink", true))
            .unwrap();

        assert!(registry.is_link_content_type(&ContentType::new("NotebookLink")));
        assert!(!registry.is_link_content_type(&ContentType::new("Notebook")));
        assert!(!registry.is_link_content_type(&ContentType::new("Mystery")));
    }
}
