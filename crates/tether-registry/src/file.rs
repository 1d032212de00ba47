use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use tether_types::{ConsumerId, ContentType, ProgressMonitor, Version};

use crate::error::FileResult;
use crate::object::DomainObject;

/// A resolved target file: the far end of a link, living in some project
/// store reachable through its URL.
///
/// Materialization is always read-side. Transparent format upgrades of old
/// revisions are the implementation's responsibility; callers never see a
/// half-upgraded object.
pub trait DomainFile: Send + Sync {
    /// Full path of the file within its store.
    fn path_name(&self) -> &str;

    /// Content-type tag of the file.
    fn content_type(&self) -> &ContentType;

    /// Persisted string metadata of the file.
    fn metadata(&self) -> HashMap<String, String>;

    /// Runtime type of the domain objects this file materializes into.
    fn domain_object_type(&self) -> TypeId;

    /// Name of that type, for diagnostics.
    fn domain_object_type_name(&self) -> &'static str;

    /// Materialize the file's content at `version` as a shareable read-only
    /// object owned by `consumer`.
    fn get_read_only_object(
        &self,
        consumer: ConsumerId,
        version: Version,
        monitor: &ProgressMonitor,
    ) -> FileResult<Arc<dyn DomainObject>>;

    /// Materialize the file's content at `version` as a frozen immutable
    /// object owned by `consumer`.
    fn get_immutable_object(
        &self,
        consumer: ConsumerId,
        version: Version,
        monitor: &ProgressMonitor,
    ) -> FileResult<Arc<dyn DomainObject>>;
}
