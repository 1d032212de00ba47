use std::any::Any;

use tether_types::ContentType;

/// In-memory materialized representation of stored content.
///
/// Implementations are concrete domain types (notebooks, sheets, link
/// objects). The subsystem only ever hands out shared read access; nothing
/// here exposes mutation.
pub trait DomainObject: Send + Sync + 'static {
    /// Display name of the object.
    fn name(&self) -> &str;

    /// The content-type tag of the handler family that produced this object.
    fn content_type(&self) -> &ContentType;

    /// Name of the concrete type, for diagnostics. Implementations return
    /// `std::any::type_name::<Self>()`.
    fn type_name(&self) -> &'static str;

    /// Upcast for runtime type inspection and downcasting.
    fn as_any(&self) -> &dyn Any;
}
