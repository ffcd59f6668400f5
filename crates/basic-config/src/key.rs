//! Normalized configuration keys.

use serde::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Canonical identifier for a config entry.
///
/// Keys are immutable shared strings compared, ordered and hashed by their
/// contents, so maps keyed by `Key` can be queried with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Arc<str>);

impl Key {
    /// Normalize a raw key from a parsed document.
    ///
    /// Normalization preserves case and spelling; it only fixes the key type.
    pub fn normalize(raw: &str) -> Self {
        Self(Arc::from(raw))
    }

    /// Borrow the key contents.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl From<String> for Key {
    fn from(raw: String) -> Self {
        Self::normalize(&raw)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Key;
    use std::collections::BTreeMap;

    /// Preserve case and spelling when normalizing.
    #[test]
    fn normalize_preserves_spelling() {
        let key = Key::normalize("Mixed_Case-key");
        assert_eq!(key.as_str(), "Mixed_Case-key");
        assert_eq!(key.to_string(), "Mixed_Case-key");
    }

    /// Normalize owned and borrowed strings to equal keys.
    #[test]
    fn owned_and_borrowed_sources_are_equal() {
        assert_eq!(Key::from("port"), Key::from(String::from("port")));
    }

    /// Query key-indexed maps with plain string slices.
    #[test]
    fn maps_are_queryable_by_str() {
        let mut map = BTreeMap::new();
        map.insert(Key::normalize("host"), 1);
        assert_eq!(map.get("host"), Some(&1));
        assert_eq!(map.get("Host"), None);
    }
}
