//! Versioned folder store boundary for Tether.
//!
//! The backing store keeps named entries in a folder hierarchy, each entry
//! carrying a content-type tag, a string metadata map, and an opaque payload.
//! Structural mutation (create, delete) is serialized by the store itself;
//! this crate only defines the boundary and an in-memory backend for tests.
//!
//! # Modules
//!
//! - [`error`] — [`StoreError`] and the [`StoreResult`] alias
//! - [`entry`] — [`StoredEntry`], the persisted record
//! - [`names`] — Folder-path and filename validation
//! - [`traits`] — The [`FolderStore`] trait defining the storage interface
//! - [`memory`] — In-memory [`InMemoryFolderStore`] for tests

pub mod entry;
pub mod error;
pub mod memory;
pub mod names;
pub mod traits;

pub use entry::StoredEntry;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryFolderStore;
pub use names::{validate_filename, validate_folder_path};
pub use traits::FolderStore;
