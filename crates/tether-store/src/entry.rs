use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tether_types::{ContentType, EntryId};

/// A persisted entry in the folder store.
///
/// Entries are immutable from this crate's point of view: recreating an
/// entry replaces it wholesale, and revision numbers only move forward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Absolute folder path containing the entry (e.g. "/projects/demo").
    pub folder_path: String,
    /// Entry filename within the folder.
    pub name: String,
    /// Handler-family tag.
    pub content_type: ContentType,
    /// String key/value metadata persisted alongside the payload.
    pub metadata: HashMap<String, String>,
    /// Opaque serialized content.
    pub payload: Vec<u8>,
    /// Current revision number, starting at 1.
    pub version: u32,
}

impl StoredEntry {
    /// Full path of the entry ("folder/name", with a single separator).
    pub fn path_name(&self) -> String {
        if self.folder_path == "/" {
            format!("/{}", self.name)
        } else {
            format!("{}/{}", self.folder_path, self.name)
        }
    }
}
