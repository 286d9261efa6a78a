//! Path items, operations and parameters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Path templates mapped to their path items, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paths {
    items: IndexMap<String, PathItem>,
}

impl Paths {
    /// Creates an empty path map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation for `method` under `path`.
    ///
    /// The path item is created on first use and reused afterwards; an
    /// operation already stored for the same method is replaced.
    pub fn set_operation(&mut self, path: &str, method: &str, operation: Operation) {
        self.items
            .entry(path.to_string())
            .or_default()
            .set(method, operation);
    }

    /// Folds `other` into this map with [`Paths::set_operation`] semantics.
    pub fn merge(&mut self, other: Self) {
        for (path, item) in other.items {
            let target = self.items.entry(path).or_default();
            for (method, operation) in item.operations {
                target.set(&method, operation);
            }
        }
    }

    /// Returns the path item for a template.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.get(path)
    }

    /// Iterates over `(template, item)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathItem)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of path templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of operations across all paths.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.items.values().map(PathItem::len).sum()
    }
}

/// Lower-cased HTTP methods mapped to operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathItem {
    operations: IndexMap<String, Operation>,
}

impl PathItem {
    /// Stores `operation` under the lower-cased `method`, replacing any previous one.
    pub fn set(&mut self, method: &str, operation: Operation) {
        self.operations.insert(method.to_lowercase(), operation);
    }

    /// Returns the operation for a method (case-insensitive).
    #[must_use]
    pub fn get(&self, method: &str) -> Option<&Operation> {
        self.operations.get(&method.to_lowercase())
    }

    /// Iterates over `(method, operation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.operations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true if the item holds no operation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A single API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Tags the operation is grouped under
    pub tags: Vec<String>,
    /// Short summary, the request name
    pub summary: String,
    /// Path parameters followed by query parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
}

impl Operation {
    /// Creates an operation; an empty parameter list is left out.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        summary: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            tags: vec![tag.into()],
            summary: summary.into(),
            parameters: if parameters.is_empty() {
                None
            } else {
                Some(parameters)
            },
        }
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Templated path segment
    Path,
    /// Query string
    Query,
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter location
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Value schema
    pub schema: Schema,
    /// Whether the parameter must be supplied
    pub required: bool,
}

impl Parameter {
    /// Creates a required string path parameter.
    #[must_use]
    pub fn path(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Path,
            schema: Schema::string(),
            required: true,
        }
    }

    /// Creates an optional string query parameter.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Query,
            schema: Schema::string(),
            required: false,
        }
    }
}

/// A parameter schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema type name
    #[serde(rename = "type")]
    pub schema_type: String,
}

impl Schema {
    /// The `{type: string}` schema.
    #[must_use]
    pub fn string() -> Self {
        Self {
            schema_type: "string".to_string(),
        }
    }
}
