use std::any::Any;
use std::sync::Mutex;

use serde::Serialize;
use tether_registry::DomainObject;
use tether_types::{ConsumerId, ContentType};
use url::Url;

use crate::error::{LinkError, LinkResult};

/// Serialized form of a link file's payload.
#[derive(Serialize)]
struct LinkPayload<'a> {
    name: &'a str,
    url: &'a str,
}

/// Transient domain object owning nothing but a target URL.
///
/// Exists only long enough to serialize a new link file into the store; it
/// is scratch state, never a long-lived handle. The creating consumer must
/// release it on every exit path.
pub struct UrlLinkObject {
    name: String,
    url: Url,
    content_type: ContentType,
    consumers: Mutex<Vec<ConsumerId>>,
}

impl UrlLinkObject {
    /// Create a link object owned by `consumer`.
    pub fn new(name: &str, url: Url, content_type: ContentType, consumer: ConsumerId) -> Self {
        Self {
            name: name.to_string(),
            url,
            content_type,
            consumers: Mutex::new(vec![consumer]),
        }
    }

    /// The target URL this object carries.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Release one hold by `consumer`. Returns `true` if the consumer held
    /// the object.
    pub fn release(&self, consumer: ConsumerId) -> bool {
        let mut consumers = self.consumers.lock().expect("lock poisoned");
        match consumers.iter().position(|c| *c == consumer) {
            Some(idx) => {
                consumers.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Number of consumers currently holding the object.
    pub fn consumer_count(&self) -> usize {
        self.consumers.lock().expect("lock poisoned").len()
    }

    /// Serialize the object into a link-file payload.
    pub fn serialize_payload(&self) -> LinkResult<Vec<u8>> {
        let payload = LinkPayload {
            name: &self.name,
            url: self.url.as_str(),
        };
        serde_json::to_vec(&payload).map_err(|e| LinkError::Serialization(e.to_string()))
    }
}

impl DomainObject for UrlLinkObject {
    fn name(&self) -> &str {
        &self.name
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
