use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tether_registry::DomainObject;
use tether_types::{ConsumerId, Version};
use tracing::debug;

/// Read semantics of a materialized object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadMode {
    /// Shareable across concurrent consumers; the owning store may upgrade
    /// the content format if needed.
    ReadOnly,
    /// Frozen snapshot; never upgraded.
    Immutable,
}

/// Identity of a shared materialization: one table slot per target path,
/// version, and mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectKey {
    /// Path of the resolved target file.
    pub target: String,
    /// Version the content was materialized at.
    pub version: Version,
    /// Read semantics.
    pub mode: ReadMode,
}

/// A materialized link target handed to a caller.
///
/// Holds shared content at one version in one mode. The caller was registered
/// as a consumer when this was produced and must release it exactly once
/// through the handler that produced it.
pub struct MaterializedObject {
    object: Arc<dyn DomainObject>,
    key: ObjectKey,
}

impl MaterializedObject {
    pub(crate) fn new(object: Arc<dyn DomainObject>, key: ObjectKey) -> Self {
        Self { object, key }
    }

    /// The shared domain object.
    pub fn object(&self) -> &Arc<dyn DomainObject> {
        &self.object
    }

    /// Version the content was materialized at.
    pub fn version(&self) -> Version {
        self.key.version
    }

    /// Read semantics of this materialization.
    pub fn mode(&self) -> ReadMode {
        self.key.mode
    }

    /// Table identity of this materialization.
    pub fn key(&self) -> &ObjectKey {
        &self.key
    }
}

impl std::fmt::Debug for MaterializedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterializedObject")
            .field("key", &self.key)
            .field("object", &self.object.name())
            .finish()
    }
}

struct Tracked {
    object: Arc<dyn DomainObject>,
    consumers: Vec<ConsumerId>,
}

/// Consumer-tracked table of shared materializations.
///
/// One entry per [`ObjectKey`]; each entry stays live while at least one
/// consumer holds it and is evicted when the last consumer releases.
pub(crate) struct ObjectTable {
    entries: RwLock<HashMap<ObjectKey, Tracked>>,
}

impl ObjectTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Join an existing materialization, registering `consumer` on it.
    ///
    /// Returns `None` if nothing is tracked under `key`.
    pub(crate) fn acquire_existing(
        &self,
        key: &ObjectKey,
        consumer: ConsumerId,
    ) -> Option<Arc<dyn DomainObject>> {
        let mut map = self.entries.write().expect("lock poisoned");
        map.get_mut(key).map(|tracked| {
            tracked.consumers.push(consumer);
            Arc::clone(&tracked.object)
        })
    }

    /// Insert a freshly materialized object under `key` with its first
    /// consumer, or join the entry another thread inserted meanwhile.
    ///
    /// Returns the canonical shared object for `key`.
    pub(crate) fn insert(
        &self,
        key: ObjectKey,
        object: Arc<dyn DomainObject>,
        consumer: ConsumerId,
    ) -> Arc<dyn DomainObject> {
        let mut map = self.entries.write().expect("lock poisoned");
        let tracked = map.entry(key).or_insert_with(|| Tracked {
            object,
            consumers: Vec::new(),
        });
        tracked.consumers.push(consumer);
        Arc::clone(&tracked.object)
    }

    /// Release one hold by `consumer`; the entry is evicted when its last
    /// consumer releases. Returns `true` if the consumer held the entry.
    pub(crate) fn release(&self, key: &ObjectKey, consumer: ConsumerId) -> bool {
        let mut map = self.entries.write().expect("lock poisoned");
        let Some(tracked) = map.get_mut(key) else {
            return false;
        };
        let Some(idx) = tracked.consumers.iter().position(|c| *c == consumer) else {
            return false;
        };
        tracked.consumers.swap_remove(idx);
        if tracked.consumers.is_empty() {
            debug!(target_path = %key.target, version = %key.version, "evicting unreferenced object");
            map.remove(key);
        }
        true
    }

    /// Number of consumers currently holding the entry under `key`.
    pub(crate) fn consumer_count(&self, key: &ObjectKey) -> usize {
        let map = self.entries.read().expect("lock poisoned");
        map.get(key).map_or(0, |t| t.consumers.len())
    }

    /// Total number of consumers across all entries.
    pub(crate) fn total_consumers(&self) -> usize {
        let map = self.entries.read().expect("lock poisoned");
        map.values().map(|t| t.consumers.len()).sum()
    }

    /// Returns `true` if nothing is tracked.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use tether_types::ContentType;

    struct Snapshot {
        content_type: ContentType,
    }

    impl Snapshot {
        fn new() -> Arc<dyn DomainObject> {
            Arc::new(Self {
                content_type: ContentType::new("Notebook"),
            })
        }
    }

    impl DomainObject for Snapshot {
        fn name(&self) -> &str {
            "snapshot"
        }

        fn content_type(&self) -> &ContentType {
            &self.content_type
        }

        fn type_name(&self) -> &'static str {
            std::any::type_name::<Self>()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn key(target: &str, version: u32, mode: ReadMode) -> ObjectKey {
        ObjectKey {
            target: target.to_string(),
            version: Version::Number(version),
            mode,
        }
    }

    #[test]
    fn insert_registers_first_consumer() {
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        table.insert(k.clone(), Snapshot::new(), ConsumerId::new());
        assert_eq!(table.consumer_count(&k), 1);
    }

    #[test]
    fn acquire_existing_shares_the_object() {
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        let first = table.insert(k.clone(), Snapshot::new(), ConsumerId::new());
        let second = table
            .acquire_existing(&k, ConsumerId::new())
            .expect("entry should exist");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(table.consumer_count(&k), 2);
    }

    #[test]
    fn acquire_existing_misses_unknown_key() {
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        assert!(table.acquire_existing(&k, ConsumerId::new()).is_none());
    }

    #[test]
    fn modes_and_versions_are_distinct_slots() {
        let table = ObjectTable::new();
        let ro = key("/repo/obj1", 1, ReadMode::ReadOnly);
        let im = key("/repo/obj1", 1, ReadMode::Immutable);
        let v2 = key("/repo/obj1", 2, ReadMode::ReadOnly);
        table.insert(ro.clone(), Snapshot::new(), ConsumerId::new());

        assert!(table.acquire_existing(&im, ConsumerId::new()).is_none());
        assert!(table.acquire_existing(&v2, ConsumerId::new()).is_none());
        assert_eq!(table.consumer_count(&ro), 1);
    }

    #[test]
    fn release_evicts_at_zero() {
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        let consumer = ConsumerId::new();
        table.insert(k.clone(), Snapshot::new(), consumer);

        assert!(table.release(&k, consumer));
        assert_eq!(table.consumer_count(&k), 0);
        assert!(table.is_empty());
        // Entry is gone; a second release finds nothing.
        assert!(!table.release(&k, consumer));
    }

    #[test]
    fn releasing_one_consumer_keeps_the_other() {
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        let first = ConsumerId::new();
        let second = ConsumerId::new();
        let object = table.insert(k.clone(), Snapshot::new(), first);
        table.insert(k.clone(), Snapshot::new(), second);

        assert!(table.release(&k, first));
        assert_eq!(table.consumer_count(&k), 1);
        let still_shared = table
            .acquire_existing(&k, ConsumerId::new())
            .expect("entry should survive");
        assert!(Arc::ptr_eq(&object, &still_shared));
    }

    #[test]
    fn release_of_unknown_consumer_is_rejected() {
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        table.insert(k.clone(), Snapshot::new(), ConsumerId::new());
        assert!(!table.release(&k, ConsumerId::new()));
        assert_eq!(table.consumer_count(&k), 1);
    }

    #[test]
    fn insert_joins_concurrent_entry() {
        // Two racers both missed acquire_existing; the second insert must
        // join the first object rather than replace it.
        let table = ObjectTable::new();
        let k = key("/repo/obj1", 1, ReadMode::ReadOnly);
        let first = table.insert(k.clone(), Snapshot::new(), ConsumerId::new());
        let second = table.insert(k.clone(), Snapshot::new(), ConsumerId::new());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(table.consumer_count(&k), 2);
    }

    #[test]
    fn total_consumers_spans_entries() {
        let table = ObjectTable::new();
        table.insert(
            key("/repo/obj1", 1, ReadMode::ReadOnly),
            Snapshot::new(),
            ConsumerId::new(),
        );
        table.insert(
            key("/repo/obj2", 1, ReadMode::Immutable),
            Snapshot::new(),
            ConsumerId::new(),
        );
        assert_eq!(table.total_consumers(), 2);
    }
}
