//! URL query dispatch for Tether.
//!
//! A link file stores nothing but a target URL; this crate resolves such a
//! URL to the [`DomainFile`] it addresses. Resolution is synchronous from the
//! caller's view and terminates in exactly one of four outcomes: resolved,
//! unauthorized, failed, or cancelled. Callers never observe a partially
//! resolved result.
//!
//! The actual lookup transport (local store walk, remote protocol) sits
//! behind the [`UrlBackend`] trait; only the in-memory backend ships here.
//!
//! [`DomainFile`]: tether_registry::DomainFile

pub mod dispatcher;
pub mod error;
pub mod memory;
pub mod outcome;
pub mod traits;

pub use dispatcher::{parse_url, UrlQueryDispatcher};
pub use error::{ResolveError, ResolveResult};
pub use memory::InMemoryUrlBackend;
pub use outcome::QueryOutcome;
pub use traits::{Located, UrlBackend};
