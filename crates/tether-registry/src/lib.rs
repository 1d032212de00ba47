//! Content-handler hierarchy for Tether.
//!
//! Every stored entry carries a content-type tag; the [`HandlerRegistry`]
//! maps each tag to the [`ContentHandler`] that knows how to materialize
//! entries of that family. The registry is explicit process state — built
//! once at startup and injected wherever handlers must be resolved, so tests
//! can supply a substitute.
//!
//! # Modules
//!
//! - [`error`] — [`RegistryError`], [`FileError`], and result aliases
//! - [`handler`] — The [`ContentHandler`] trait and merge/change-set markers
//! - [`object`] — The [`DomainObject`] trait for materialized content
//! - [`file`] — The [`DomainFile`] trait for resolved target files
//! - [`registry`] — The [`HandlerRegistry`]
//! - [`validate`] — Pure runtime-type validation

pub mod error;
pub mod file;
pub mod handler;
pub mod object;
pub mod registry;
pub mod validate;

pub use error::{FileError, FileResult, RegistryError, RegistryResult};
pub use file::DomainFile;
pub use handler::{ChangeSet, ContentHandler, MergeManager};
pub use object::DomainObject;
pub use registry::HandlerRegistry;
pub use validate::validate_object_type;
