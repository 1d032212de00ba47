use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use tether_registry::DomainFile;
use url::Url;

use crate::error::ResolveResult;
use crate::traits::{Located, UrlBackend};

/// In-memory URL backend for tests.
///
/// Maps exact URL strings to target files. URLs can additionally be marked
/// denied, which makes lookups answer `Unauthorized` instead of `Found`.
pub struct InMemoryUrlBackend {
    files: RwLock<HashMap<String, Arc<dyn DomainFile>>>,
    denied: RwLock<HashSet<String>>,
}

impl InMemoryUrlBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            denied: RwLock::new(HashSet::new()),
        }
    }

    /// Map a URL to a target file.
    pub fn insert(&self, url: &str, file: Arc<dyn DomainFile>) {
        self.files
            .write()
            .expect("lock poisoned")
            .insert(url.to_string(), file);
    }

    /// Mark a URL as unauthorized for the caller.
    pub fn deny(&self, url: &str) {
        self.denied
            .write()
            .expect("lock poisoned")
            .insert(url.to_string());
    }

    /// Number of mapped URLs.
    pub fn len(&self) -> usize {
        self.files.read().expect("lock poisoned").len()
    }

    /// Returns `true` if no URLs are mapped.
    pub fn is_empty(&self) -> bool {
        self.files.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryUrlBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlBackend for InMemoryUrlBackend {
    fn locate(&self, url: &Url) -> ResolveResult<Located> {
        let key = url.to_string();
        if self.denied.read().expect("lock poisoned").contains(&key) {
            return Ok(Located::Unauthorized);
        }
        let files = self.files.read().expect("lock poisoned");
        Ok(match files.get(&key) {
            Some(file) => Located::Found(Arc::clone(file)),
            None => Located::Missing,
        })
    }
}

impl std::fmt::Debug for InMemoryUrlBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUrlBackend")
            .field("url_count", &self.len())
            .finish()
    }
}
