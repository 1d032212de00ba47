use std::any::TypeId;

use tether_types::ContentType;

/// A family of stored content: one handler per content-type tag.
///
/// Handlers describe the domain-object type their entries materialize into.
/// Concrete materialization APIs live on the handler implementations
/// themselves; this trait is the registry-facing surface.
pub trait ContentHandler: Send + Sync {
    /// The content-type tag this handler owns.
    fn content_type(&self) -> &ContentType;

    /// Human-readable description of the content family.
    fn description(&self) -> &str;

    /// Runtime type of the domain objects this handler materializes.
    fn domain_object_type(&self) -> TypeId;

    /// Name of that type, for diagnostics.
    fn domain_object_type_name(&self) -> &'static str;

    /// Returns `true` if entries of this family are pure indirections to a
    /// target URL rather than content of their own.
    fn is_link(&self) -> bool {
        false
    }
}

/// Summary of differences between two revisions of an entry's content.
///
/// Link files have no independent history and never produce one.
pub trait ChangeSet: Send + Sync {}

/// Three-way merge driver for concurrent edits of an entry's content.
///
/// Link files never participate in merges and never produce one.
pub trait MergeManager: Send + Sync {}
