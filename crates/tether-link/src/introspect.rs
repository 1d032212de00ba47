//! Link-URL readout.
//!
//! Two equivalent access paths exist: one over high-level [`DomainFile`]
//! handles and one over low-level [`StoredEntry`] records. Both resolve the
//! content type through the same injected registry and read the same
//! metadata key, and must agree bit-for-bit on the same underlying entry.

use tether_registry::{DomainFile, HandlerRegistry};
use tether_resolve::parse_url;
use tether_store::StoredEntry;
use tether_types::ContentType;
use url::Url;

use crate::error::{LinkError, LinkResult};

/// Metadata key under which a link file persists its target URL. The only
/// externally visible field this subsystem defines.
pub const URL_METADATA_KEY: &str = "link.url";

fn read_link_url(
    content_type: &ContentType,
    url_value: Option<&String>,
    registry: &HandlerRegistry,
) -> LinkResult<Url> {
    if registry.is_link_content_type(content_type) {
        if let Some(raw) = url_value {
            return parse_url(raw).map_err(|e| LinkError::Resolution {
                url: raw.clone(),
                source: e,
            });
        }
    }
    Err(LinkError::InvalidLinkFile {
        content_type: content_type.clone(),
    })
}

/// Read the target URL of a link file through its low-level stored entry.
///
/// Fails with [`LinkError::InvalidLinkFile`] if the entry's content type is
/// not a registered link type or the `link.url` key is absent.
pub fn link_url_of_entry(entry: &StoredEntry, registry: &HandlerRegistry) -> LinkResult<Url> {
    read_link_url(
        &entry.content_type,
        entry.metadata.get(URL_METADATA_KEY),
        registry,
    )
}

/// Read the target URL of a link file through its high-level file handle.
///
/// Same rules and same result as [`link_url_of_entry`] for the same
/// underlying entry.
pub fn link_url_of_file(file: &dyn DomainFile, registry: &HandlerRegistry) -> LinkResult<Url> {
    let metadata = file.metadata();
    read_link_url(
        file.content_type(),
        metadata.get(URL_METADATA_KEY),
        registry,
    )
}
