use std::collections::HashMap;
use std::sync::RwLock;

use tether_types::{ContentType, EntryId, ProgressMonitor};
use tracing::debug;

use crate::entry::StoredEntry;
use crate::error::{StoreError, StoreResult};
use crate::names::{validate_filename, validate_folder_path};
use crate::traits::FolderStore;

/// In-memory, HashMap-based folder store.
///
/// Intended for tests and embedding. All entries are held in memory behind a
/// `RwLock` for safe concurrent access. Entries are cloned on read.
pub struct InMemoryFolderStore {
    entries: RwLock<HashMap<(String, String), StoredEntry>>,
}

impl InMemoryFolderStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryFolderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderStore for InMemoryFolderStore {
    fn create(
        &self,
        folder_path: &str,
        filename: &str,
        content_type: &ContentType,
        metadata: HashMap<String, String>,
        payload: Vec<u8>,
        monitor: &ProgressMonitor,
    ) -> StoreResult<EntryId> {
        validate_folder_path(folder_path)?;
        validate_filename(filename)?;
        monitor.check_cancelled()?;

        let key = (folder_path.to_string(), filename.to_string());
        let mut map = self.entries.write().expect("lock poisoned");
        if map.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                path: format!("{folder_path}/{filename}"),
            });
        }

        let entry = StoredEntry {
            id: EntryId::new(),
            folder_path: folder_path.to_string(),
            name: filename.to_string(),
            content_type: content_type.clone(),
            metadata,
            payload,
            version: 1,
        };
        let id = entry.id;
        debug!(path = %entry.path_name(), content_type = %content_type, "created entry");
        map.insert(key, entry);
        Ok(id)
    }

    fn entry(&self, folder_path: &str, filename: &str) -> StoreResult<Option<StoredEntry>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map
            .get(&(folder_path.to_string(), filename.to_string()))
            .cloned())
    }

    fn entry_by_id(&self, id: &EntryId) -> StoreResult<Option<StoredEntry>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.values().find(|e| e.id == *id).cloned())
    }

    fn read_metadata(&self, id: &EntryId) -> StoreResult<HashMap<String, String>> {
        let map = self.entries.read().expect("lock poisoned");
        map.values()
            .find(|e| e.id == *id)
            .map(|e| e.metadata.clone())
            .ok_or_else(|| StoreError::NotFound {
                path: id.to_string(),
            })
    }

    fn delete(&self, folder_path: &str, filename: &str) -> StoreResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        Ok(map
            .remove(&(folder_path.to_string(), filename.to_string()))
            .is_some())
    }
}

impl std::fmt::Debug for InMemoryFolderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFolderStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
