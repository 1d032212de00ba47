use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use tether_registry::{
    validate_object_type, ChangeSet, ContentHandler, DomainObject, FileError, HandlerRegistry,
    MergeManager, RegistryError,
};
use tether_resolve::{QueryOutcome, ResolveError, UrlQueryDispatcher};
use tether_store::{FolderStore, StoreError, StoredEntry};
use tether_types::{CancelledError, ConsumerId, ContentType, EntryId, ProgressMonitor, Version};
use tracing::debug;
use url::Url;

use crate::error::{LinkError, LinkResult};
use crate::introspect::{link_url_of_entry, URL_METADATA_KEY};
use crate::link_object::UrlLinkObject;
use crate::object_table::{MaterializedObject, ObjectKey, ObjectTable, ReadMode};

/// Content handler for link files: entries that are pure indirection to a
/// target URL of one declared content family.
///
/// One handler instance serves one link content type (e.g. a notebook-link
/// handler materializing notebook targets). Materializations are shared:
/// concurrent consumers of the same target, version, and mode receive the
/// same object, and the object stays live until its last consumer releases
/// it through [`LinkHandler::release`].
///
/// # Panics
///
/// Capabilities that do not apply to pure indirections fail loudly as
/// programmer errors rather than returning data errors:
///
/// - [`get_read_only_object`](Self::get_read_only_object) with
///   `ok_to_upgrade == false`
/// - [`get_immutable_object`](Self::get_immutable_object) with a
///   `min_change_version`
/// - [`get_domain_object`](Self::get_domain_object) (writable retrieval)
/// - [`is_private_content_type`](Self::is_private_content_type)
pub struct LinkHandler {
    content_type: ContentType,
    description: String,
    target_type: TypeId,
    target_type_name: &'static str,
    registry: Arc<HandlerRegistry>,
    dispatcher: Arc<UrlQueryDispatcher>,
    objects: ObjectTable,
}

impl LinkHandler {
    /// Create a link handler for targets materializing into `T`.
    pub fn new<T: DomainObject>(
        content_type: ContentType,
        description: impl Into<String>,
        registry: Arc<HandlerRegistry>,
        dispatcher: Arc<UrlQueryDispatcher>,
    ) -> Self {
        Self {
            content_type,
            description: description.into(),
            target_type: TypeId::of::<T>(),
            target_type_name: std::any::type_name::<T>(),
            registry,
            dispatcher,
            objects: ObjectTable::new(),
        }
    }

    /// Create a link file pointing at `url`.
    ///
    /// The URL must use a scheme the dispatcher supports; the folder path and
    /// filename must satisfy the store's naming rules. A transient
    /// [`UrlLinkObject`] is serialized into the entry's payload and released
    /// on every exit path. The write itself is not cancellable; the store
    /// reporting cancellation here is an internal-invariant violation and
    /// panics.
    pub fn create_link(
        &self,
        url: &Url,
        store: &dyn FolderStore,
        folder_path: &str,
        filename: &str,
    ) -> LinkResult<EntryId> {
        if !self.dispatcher.supports_scheme(url.scheme()) {
            return Err(LinkError::Resolution {
                url: url.to_string(),
                source: ResolveError::UnsupportedScheme {
                    url: url.to_string(),
                    scheme: url.scheme().to_string(),
                },
            });
        }

        let creator = ConsumerId::new();
        let link = UrlLinkObject::new(filename, url.clone(), self.content_type.clone(), creator);

        let result = link.serialize_payload().and_then(|payload| {
            let mut metadata = HashMap::new();
            metadata.insert(URL_METADATA_KEY.to_string(), url.to_string());
            store
                .create(
                    folder_path,
                    filename,
                    &self.content_type,
                    metadata,
                    payload,
                    &ProgressMonitor::dummy(),
                )
                .map_err(LinkError::from)
        });

        // The transient object is scratch state for serialization only;
        // released whether or not the write succeeded.
        link.release(creator);

        match result {
            Err(LinkError::Store(StoreError::Cancelled(_))) => {
                unreachable!("link creation ran under a non-cancellable monitor")
            }
            other => {
                if other.is_ok() {
                    debug!(url = %url, path = %format!("{folder_path}/{filename}"), "created link file");
                }
                other
            }
        }
    }

    /// Materialize the link's target at `version` as a shareable read-only
    /// object.
    ///
    /// Link resolution never supports a strictly pinned, non-upgradable read;
    /// `ok_to_upgrade` must be `true`. Passing `false` panics.
    pub fn get_read_only_object(
        &self,
        entry: &StoredEntry,
        version: Version,
        ok_to_upgrade: bool,
        consumer: ConsumerId,
        monitor: &ProgressMonitor,
    ) -> LinkResult<MaterializedObject> {
        assert!(ok_to_upgrade, "ok_to_upgrade must be true for a link file");
        self.materialize(entry, version, consumer, monitor, ReadMode::ReadOnly)
    }

    /// Materialize the link's target at `version` as a frozen immutable
    /// object.
    ///
    /// Link files do not support partial-range immutability;
    /// `min_change_version` must be `None`. Passing one panics.
    pub fn get_immutable_object(
        &self,
        entry: &StoredEntry,
        consumer: ConsumerId,
        version: Version,
        min_change_version: Option<Version>,
        monitor: &ProgressMonitor,
    ) -> LinkResult<MaterializedObject> {
        assert!(
            min_change_version.is_none(),
            "min_change_version must be None for a link file"
        );
        self.materialize(entry, version, consumer, monitor, ReadMode::Immutable)
    }

    fn materialize(
        &self,
        entry: &StoredEntry,
        version: Version,
        consumer: ConsumerId,
        monitor: &ProgressMonitor,
        mode: ReadMode,
    ) -> LinkResult<MaterializedObject> {
        let url = link_url_of_entry(entry, &self.registry)?;

        let file = match self.dispatcher.resolve(&url, monitor) {
            QueryOutcome::Resolved(file) => file,
            QueryOutcome::Unauthorized => {
                return Err(LinkError::Unauthorized {
                    url: url.to_string(),
                })
            }
            QueryOutcome::Failed(source) => {
                return Err(LinkError::Resolution {
                    url: url.to_string(),
                    source,
                })
            }
            QueryOutcome::Cancelled => return Err(LinkError::Cancelled(CancelledError)),
        };

        // Declared type must match before any materialization I/O.
        validate_object_type(
            self.target_type,
            self.target_type_name,
            file.domain_object_type(),
            file.domain_object_type_name(),
        )
        .map_err(|e| Self::into_type_mismatch(&url, e))?;

        let key = ObjectKey {
            target: file.path_name().to_string(),
            version,
            mode,
        };
        if let Some(object) = self.objects.acquire_existing(&key, consumer) {
            return Ok(MaterializedObject::new(object, key));
        }

        monitor.check_cancelled()?;
        debug!(url = %url, version = %version, ?mode, "materializing link target");

        let object = match mode {
            ReadMode::ReadOnly => file.get_read_only_object(consumer, version, monitor),
            ReadMode::Immutable => file.get_immutable_object(consumer, version, monitor),
        }
        .map_err(|e| match e {
            FileError::VersionIncompatible { requested, reason } => {
                LinkError::VersionIncompatible {
                    url: url.to_string(),
                    requested,
                    reason,
                }
            }
            FileError::Cancelled(c) => LinkError::Cancelled(c),
            FileError::Io(e) => LinkError::Io(e),
        })?;

        // Re-check the returned object's runtime type; the file's declared
        // type was validated, the produced object must agree with it.
        validate_object_type(
            self.target_type,
            self.target_type_name,
            object.as_any().type_id(),
            object.type_name(),
        )
        .map_err(|e| Self::into_type_mismatch(&url, e))?;

        let object = self.objects.insert(key.clone(), object, consumer);
        Ok(MaterializedObject::new(object, key))
    }

    fn into_type_mismatch(url: &Url, err: RegistryError) -> LinkError {
        match err {
            RegistryError::TypeMismatch { expected, actual } => LinkError::TypeMismatch {
                url: url.to_string(),
                expected,
                actual,
            },
            // validate_object_type only produces TypeMismatch.
            other => unreachable!("unexpected validation error: {other}"),
        }
    }

    /// Release one hold on a materialized object. The shared entry is freed
    /// when its last consumer releases it. Returns `true` if `consumer` held
    /// the object.
    pub fn release(&self, object: &MaterializedObject, consumer: ConsumerId) -> bool {
        self.objects.release(object.key(), consumer)
    }

    /// Number of consumers currently sharing a materialized object.
    pub fn consumer_count(&self, object: &MaterializedObject) -> usize {
        self.objects.consumer_count(object.key())
    }

    /// Total tracked consumers across all materializations of this handler.
    pub fn tracked_consumers(&self) -> usize {
        self.objects.total_consumers()
    }

    /// Writable retrieval is unsupported for link files.
    ///
    /// Always panics; use [`get_read_only_object`](Self::get_read_only_object)
    /// or [`get_immutable_object`](Self::get_immutable_object).
    pub fn get_domain_object(
        &self,
        _entry: &StoredEntry,
        _version: Version,
        _ok_to_upgrade: bool,
        _consumer: ConsumerId,
        _monitor: &ProgressMonitor,
    ) -> LinkResult<MaterializedObject> {
        panic!("link file does not support writable retrieval");
    }

    /// Link files have no independent change history; always `None`.
    pub fn change_set(
        &self,
        _entry: &StoredEntry,
        _older_version: Version,
        _newer_version: Version,
    ) -> Option<Box<dyn ChangeSet>> {
        None
    }

    /// Link files never participate in merges; always `None`.
    pub fn merge_manager(
        &self,
        _results: &dyn DomainObject,
        _source: &dyn DomainObject,
        _original: &dyn DomainObject,
        _latest: &dyn DomainObject,
    ) -> Option<Box<dyn MergeManager>> {
        None
    }

    /// A link's privacy depends on its target, which only the caller can
    /// classify. Always panics.
    pub fn is_private_content_type(&self) -> bool {
        panic!("link privacy depends on the target URL, not the link file");
    }
}

impl ContentHandler for LinkHandler {
    fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn domain_object_type(&self) -> TypeId {
        self.target_type
    }

    fn domain_object_type_name(&self) -> &'static str {
        self.target_type_name
    }

    fn is_link(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for LinkHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkHandler")
            .field("content_type", &self.content_type)
            .field("target_type", &self.target_type_name)
            .finish()
    }
}
