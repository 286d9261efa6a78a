//! Expansion of flat `a__b__c` metadata keys into nested objects.

use oapub_domain::metadata::{BASE_URL_KEY, KEY_SEPARATOR, OPENAPI_ROOT_KEY};
use oapub_domain::FlatMetadata;
use serde_json::{Map, Value};

/// The parts of the expanded metadata the publisher cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishMetadata {
    /// Collection-level server URL, as stored
    pub base_url: Option<Value>,
    /// The `oa` sub-tree holding `info` and `externalDocs`
    pub openapi: Option<Value>,
}

/// Expands separator-joined keys into a nested object.
///
/// The first key that establishes a path wins. A later key addressing the
/// same path, or a path below an existing scalar, is silently dropped.
///
/// ```
/// use oapub_application::metadata::expand_key_paths;
/// use oapub_domain::FlatMetadata;
/// use serde_json::json;
///
/// let flat: FlatMetadata = [("a__b__c", json!(1)), ("a", json!(2))].into_iter().collect();
/// assert_eq!(serde_json::Value::Object(expand_key_paths(&flat)), json!({"a": {"b": {"c": 1}}}));
/// ```
#[must_use]
pub fn expand_key_paths(flat: &FlatMetadata) -> Map<String, Value> {
    let mut root = Map::new();

    for (key, value) in flat.iter() {
        let segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        if !insert_path(&mut root, &segments, value) {
            tracing::debug!(key, "metadata path already taken, key dropped");
        }
    }

    root
}

fn insert_path(node: &mut Map<String, Value>, segments: &[&str], value: &Value) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };

    if rest.is_empty() {
        if node.contains_key(*first) {
            return false;
        }
        node.insert((*first).to_string(), value.clone());
        return true;
    }

    match node
        .entry((*first).to_string())
        .or_insert_with(|| Value::Object(Map::new()))
    {
        Value::Object(child) => insert_path(child, rest, value),
        _ => false,
    }
}

/// Expands the metadata and picks out `base_url` and the `oa` sub-tree.
#[must_use]
pub fn split_metadata(flat: &FlatMetadata) -> PublishMetadata {
    let mut expanded = expand_key_paths(flat);
    PublishMetadata {
        base_url: expanded.remove(BASE_URL_KEY),
        openapi: expanded.remove(OPENAPI_ROOT_KEY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn flat(entries: &[(&str, Value)]) -> FlatMetadata {
        entries.iter().cloned().collect()
    }

    fn expand(entries: &[(&str, Value)]) -> Value {
        Value::Object(expand_key_paths(&flat(entries)))
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(expand(&[("a__b__c", json!(1))]), json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_sibling_keys_share_parent() {
        let value = expand(&[
            ("oa__contact__name", json!("Jane")),
            ("oa__contact__email", json!("jane@example.com")),
            ("oa__title", json!("Api")),
        ]);
        assert_eq!(
            value,
            json!({"oa": {"contact": {"name": "Jane", "email": "jane@example.com"}, "title": "Api"}})
        );
    }

    #[test]
    fn test_key_below_existing_leaf_is_dropped() {
        assert_eq!(expand(&[("a", json!(1)), ("a__b", json!(2))]), json!({"a": 1}));
    }

    #[test]
    fn test_leaf_over_existing_object_is_dropped() {
        assert_eq!(
            expand(&[("a__b", json!(2)), ("a", json!(1))]),
            json!({"a": {"b": 2}})
        );
    }

    #[test]
    fn test_deeper_key_under_nested_leaf_is_dropped() {
        let value = expand(&[
            ("oa__license__name", json!("MIT")),
            ("oa__license__name__spdx", json!("MIT-0")),
            ("oa__license__url", json!("https://mit.test")),
        ]);
        assert_eq!(
            value,
            json!({"oa": {"license": {"name": "MIT", "url": "https://mit.test"}}})
        );
    }

    #[test]
    fn test_split_metadata() {
        let metadata = split_metadata(&flat(&[
            ("oa__title", json!("Api")),
            ("base_url", json!("http://api.test")),
            ("id", json!(10)),
        ]));

        assert_eq!(metadata.base_url, Some(json!("http://api.test")));
        assert_eq!(metadata.openapi, Some(json!({"title": "Api"})));
    }

    #[test]
    fn test_split_metadata_without_oa() {
        let metadata = split_metadata(&flat(&[("base_url", json!("http://api.test"))]));
        assert!(metadata.openapi.is_none());
    }
}
