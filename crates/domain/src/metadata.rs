//! Flat collection metadata.
//!
//! Collection variables carry the OpenAPI metadata as a flat record whose
//! keys encode an object path, e.g. `oa__contact__email`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between the segments of a flat metadata key.
pub const KEY_SEPARATOR: &str = "__";

/// Root segment under which the OpenAPI metadata lives.
pub const OPENAPI_ROOT_KEY: &str = "oa";

/// Key of the collection-level (and environment-level) server URL.
pub const BASE_URL_KEY: &str = "base_url";

/// An ordered mapping of separator-joined keys to scalar values.
///
/// Insertion order matters: when two keys address the same object path the
/// earlier one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatMetadata {
    entries: IndexMap<String, Value>,
}

impl FlatMetadata {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, replacing the value of an identical key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FlatMetadata
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
