use std::collections::HashMap;

use tether_types::{ContentType, EntryId, ProgressMonitor};

use crate::entry::StoredEntry;
use crate::error::StoreResult;

/// Versioned folder store.
///
/// All implementations must satisfy these invariants:
/// - Structural mutation (create, delete) is serialized by the store; callers
///   never take their own locks around store calls.
/// - An entry's path names exactly one entry at a time; creating over an
///   existing entry fails rather than replacing it.
/// - Revision numbers start at 1 and only increase.
/// - All I/O errors are propagated, never silently ignored.
pub trait FolderStore: Send + Sync {
    /// Create a new entry and return its store-assigned ID.
    ///
    /// Validates the folder path and filename against the store's naming
    /// rules. Missing parent folders are created implicitly. The monitor is
    /// polled before the write; a cancelled monitor fails the call with
    /// `StoreError::Cancelled` and leaves no entry behind.
    fn create(
        &self,
        folder_path: &str,
        filename: &str,
        content_type: &ContentType,
        metadata: HashMap<String, String>,
        payload: Vec<u8>,
        monitor: &ProgressMonitor,
    ) -> StoreResult<EntryId>;

    /// Look up an entry by folder path and filename.
    ///
    /// Returns `Ok(None)` if no entry exists at that path.
    fn entry(&self, folder_path: &str, filename: &str) -> StoreResult<Option<StoredEntry>>;

    /// Look up an entry by its store-assigned ID.
    fn entry_by_id(&self, id: &EntryId) -> StoreResult<Option<StoredEntry>>;

    /// Read the metadata map of an existing entry.
    ///
    /// Fails with `StoreError::NotFound` if the entry does not exist.
    fn read_metadata(&self, id: &EntryId) -> StoreResult<HashMap<String, String>>;

    /// Delete an entry. Returns `true` if the entry existed.
    fn delete(&self, folder_path: &str, filename: &str) -> StoreResult<bool>;
}
