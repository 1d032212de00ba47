use std::fmt;

use serde::{Deserialize, Serialize};

/// String tag identifying which handler family a stored entry belongs to.
///
/// Content types are opaque to the store itself; the handler registry maps
/// each tag to the handler that knows how to materialize entries carrying it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(String);

impl ContentType {
    /// Create a content type from a tag string.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentType({:?})", self.0)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_tag() {
        assert_eq!(ContentType::new("Notebook"), ContentType::from("Notebook"));
        assert_ne!(ContentType::new("Notebook"), ContentType::new("Sheet"));
    }

    #[test]
    fn display_is_raw_tag() {
        let ct = ContentType::new("NotebookLink");
        assert_eq!(ct.to_string(), "NotebookLink");
        assert_eq!(ct.as_str(), "NotebookLink");
    }

    #[test]
    fn serde_is_transparent() {
        let ct = ContentType::new("Sheet");
        let json = serde_json::to_string(&ct).unwrap();
        assert_eq!(json, "\"Sheet\"");
        let parsed: ContentType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ct);
    }
}
