//! Foundation types for Tether.
//!
//! This crate provides the core value types used throughout the Tether
//! project store. Every other Tether crate depends on `tether-types`.
//!
//! # Key Types
//!
//! - [`ContentType`] — String tag identifying a stored entry's handler family
//! - [`Version`] — Content revision selector (`Latest` or a numbered revision)
//! - [`ConsumerId`] — Opaque UUID v7 identity tracking shared object ownership
//! - [`EntryId`] — UUID v7 identifier of a stored entry
//! - [`ProgressMonitor`] — Cancellation-aware monitor polled by long calls

pub mod content_type;
pub mod error;
pub mod ids;
pub mod monitor;
pub mod version;

pub use content_type::ContentType;
pub use error::CancelledError;
pub use ids::{ConsumerId, EntryId};
pub use monitor::ProgressMonitor;
pub use version::Version;
