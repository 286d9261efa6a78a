//! Top-level document, info section, servers and tags.

use serde::{Deserialize, Serialize};

use super::Paths;

/// OpenAPI version written into every document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// A complete OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiDocument {
    /// OpenAPI version, always [`OPENAPI_VERSION`]
    pub openapi: String,
    /// API metadata
    pub info: Info,
    /// External documentation, only emitted when configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,
    /// Servers collected from the collection and its environments
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Tags derived from the folder hierarchy
    #[serde(default)]
    pub tags: TagSet,
    /// Path templates and their operations
    #[serde(default)]
    pub paths: Paths,
}

impl OpenApiDocument {
    /// Creates a document with the given metadata and no servers, tags or paths.
    #[must_use]
    pub fn new(info: Info) -> Self {
        Self {
            openapi: OPENAPI_VERSION.to_string(),
            info,
            external_docs: None,
            servers: Vec::new(),
            tags: TagSet::new(),
            paths: Paths::new(),
        }
    }
}

/// The `info` section.
///
/// Optional scalar fields serialize as `null` when unset; nested objects are
/// left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// API title
    pub title: String,
    /// Longer description
    pub description: Option<String>,
    /// Terms of service URL
    pub terms_of_service: Option<String>,
    /// Contact details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    /// Semantic version of the API, `null` when missing or not a valid semver
    pub version: Option<String>,
}

impl Info {
    /// Creates an info section with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Contact information for the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name
    pub name: Option<String>,
    /// Contact URL
    pub url: Option<String>,
    /// Contact email
    pub email: Option<String>,
}

/// License information for the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License name
    pub name: String,
    /// License URL
    pub url: Option<String>,
}

/// External documentation reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// Description of the target documentation
    pub description: Option<String>,
    /// URL of the target documentation
    pub url: Option<String>,
}

/// A server the API is reachable at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    pub url: String,
    /// Where the server came from ("Default" or an environment name)
    pub description: String,
}

impl Server {
    /// Creates a new server entry.
    #[must_use]
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            description: description.into(),
        }
    }
}

/// A grouping label for operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
}

/// Tags unique by name, kept in first-registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Registers a tag unless one with the same name exists.
    ///
    /// Empty names are ignored. Returns whether the tag was added.
    pub fn insert(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.tags.push(Tag {
            name: name.to_string(),
        });
        true
    }

    /// Returns true if a tag with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Registers every tag of `other` that is not yet present, in its order.
    pub fn merge(&mut self, other: Self) {
        for tag in other.tags {
            self.insert(&tag.name);
        }
    }

    /// Iterates over the tags in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Returns the number of tags.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if no tag is registered.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
