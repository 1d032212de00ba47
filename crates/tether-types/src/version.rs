use std::fmt;

use serde::{Deserialize, Serialize};

/// Selects which revision of a stored entry's content to read.
///
/// Versions are monotonically increasing integers assigned by the backing
/// store. `Latest` always names the newest revision at the time of the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// The newest revision available.
    Latest,
    /// A specific numbered revision.
    Number(u32),
}

impl Version {
    /// Returns `true` if this selects the newest revision.
    pub fn is_latest(&self) -> bool {
        matches!(self, Version::Latest)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Latest => f.write_str("latest"),
            Version::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<u32> for Version {
    fn from(n: u32) -> Self {
        Version::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_displays_as_word() {
        assert_eq!(Version::Latest.to_string(), "latest");
        assert!(Version::Latest.is_latest());
    }

    #[test]
    fn number_displays_as_digits() {
        assert_eq!(Version::Number(7).to_string(), "7");
        assert!(!Version::Number(7).is_latest());
    }

    #[test]
    fn from_u32() {
        assert_eq!(Version::from(3), Version::Number(3));
    }

    #[test]
    fn serde_roundtrip() {
        for v in [Version::Latest, Version::Number(42)] {
            let json = serde_json::to_string(&v).unwrap();
            let parsed: Version = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, v);
        }
    }
}
