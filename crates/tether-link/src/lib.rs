//! Link-file handling for Tether.
//!
//! A link file is a stored entry that is pure indirection: it carries nothing
//! but a target URL (persisted under the `link.url` metadata key) and a
//! content-type tag naming the family it links to. This crate creates link
//! files, reads their URLs back through both the entry-level and file-level
//! access paths, and materializes link targets into shared, caller-tracked
//! in-memory objects.
//!
//! # Restrictions
//!
//! Because a link file has no content of its own, a whole set of handler
//! capabilities is permanently disabled for it: writable retrieval, change
//! sets, merges, and the privacy query. Misusing one of those is a programmer
//! error and panics; see [`LinkHandler`].
//!
//! # Modules
//!
//! - [`error`] — [`LinkError`] and the [`LinkResult`] alias
//! - [`link_object`] — [`UrlLinkObject`], the transient single-attribute object
//! - [`introspect`] — Link-URL readout over both access paths
//! - [`object_table`] — Consumer-tracked shared object table
//! - [`handler`] — [`LinkHandler`], the content handler for link files

pub mod error;
pub mod handler;
pub mod introspect;
pub mod link_object;
pub mod object_table;

pub use error::{LinkError, LinkResult};
pub use handler::LinkHandler;
pub use introspect::{link_url_of_entry, link_url_of_file, URL_METADATA_KEY};
pub use link_object::UrlLinkObject;
pub use object_table::{MaterializedObject, ObjectKey, ReadMode};
