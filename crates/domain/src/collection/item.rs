//! Collection item types

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::metadata::FlatMetadata;
use crate::request::RequestSpec;

/// A folder containing requests and other folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name
    pub name: String,
    /// Full path of the folder on disk, separators included
    #[serde(default)]
    pub pathname: String,
    /// Nesting depth within the collection
    #[serde(default)]
    pub depth: usize,
    /// Items in this folder
    #[serde(default)]
    pub items: Vec<CollectionItem>,
}

impl Folder {
    /// Creates a new empty folder.
    #[must_use]
    pub fn new(name: impl Into<String>, pathname: impl Into<String>, depth: usize) -> Self {
        Self {
            name: name.into(),
            pathname: pathname.into(),
            depth,
            items: Vec::new(),
        }
    }

    /// Appends a child item, builder style.
    #[must_use]
    pub fn with_item(mut self, item: CollectionItem) -> Self {
        self.items.push(item);
        self
    }
}

/// A saved request together with its position in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    /// Request name, used as the operation summary
    pub name: String,
    /// Full path of the request file, separators included
    #[serde(default)]
    pub pathname: String,
    /// Nesting depth within the collection, counting the request itself
    #[serde(default)]
    pub depth: usize,
    /// The request definition
    pub request: RequestSpec,
}

impl RequestItem {
    /// Creates a new request item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        pathname: impl Into<String>,
        depth: usize,
        request: RequestSpec,
    ) -> Self {
        Self {
            name: name.into(),
            pathname: pathname.into(),
            depth,
            request,
        }
    }
}

/// The flavour of a request item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Plain HTTP request
    Http,
    /// GraphQL request
    Graphql,
}

/// An item in a collection (a folder or one of the request kinds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CollectionItem {
    /// A folder containing other items
    Folder(Folder),
    /// An HTTP request
    HttpRequest(RequestItem),
    /// A GraphQL request
    GraphqlRequest(RequestItem),
}

impl CollectionItem {
    /// Returns the request and its kind, or `None` for folders.
    #[must_use]
    pub const fn as_request(&self) -> Option<(RequestKind, &RequestItem)> {
        match self {
            Self::Folder(_) => None,
            Self::HttpRequest(r) => Some((RequestKind::Http, r)),
            Self::GraphqlRequest(r) => Some((RequestKind::Graphql, r)),
        }
    }
}

/// A collection as handed over by the API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection name, also the exported file stem
    pub name: String,
    /// Top-level items
    #[serde(default)]
    pub items: Vec<CollectionItem>,
    /// Environments defined for the collection
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// Flat `oa__*` metadata and collection-level `base_url`
    #[serde(default)]
    pub collection_variables: FlatMetadata,
}

impl Collection {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            environments: Vec::new(),
            collection_variables: FlatMetadata::new(),
        }
    }

    /// Adds an item to the collection root.
    pub fn add_item(&mut self, item: CollectionItem) {
        self.items.push(item);
    }

    /// Returns the total number of requests in the collection (recursive).
    #[must_use]
    pub fn request_count(&self) -> usize {
        fn count_in_items(items: &[CollectionItem]) -> usize {
            items.iter().fold(0, |acc, item| {
                acc + match item {
                    CollectionItem::Folder(f) => count_in_items(&f.items),
                    CollectionItem::HttpRequest(_) | CollectionItem::GraphqlRequest(_) => 1,
                }
            })
        }
        count_in_items(&self.items)
    }
}
