//! Collection traversal into OpenAPI `paths` and `tags`.
//!
//! The walk is depth-first and keeps each folder's child order. Every call
//! builds its own [`Traversal`] and the caller merges it, so no accumulator is
//! shared across recursion levels.

use oapub_domain::{CollectionItem, Operation, Paths, RequestItem, RequestKind, TagSet};

use crate::error::{PublishError, PublishResult};
use crate::path::{extract_query_parameters, parse_request_path};

/// Separator between folder names in a derived tag.
pub const TAG_SEPARATOR: &str = " -> ";

/// Paths and tags gathered from part of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Path templates and their operations
    pub paths: Paths,
    /// Folder-derived tags
    pub tags: TagSet,
}

impl Traversal {
    /// Folds a partial result into this one.
    pub fn merge(&mut self, other: Self) {
        self.tags.merge(other.tags);
        self.paths.merge(other.paths);
    }

    fn add_request(&mut self, kind: RequestKind, item: &RequestItem) -> PublishResult<()> {
        let tag = derive_tag(&item.pathname, item.depth);
        if self.tags.insert(&tag) {
            tracing::debug!(tag = %tag, "registered tag");
        }

        let parsed = parse_request_path(&item.request.url).map_err(|source| {
            PublishError::InvalidRequestUrl {
                request: item.name.clone(),
                source,
            }
        })?;

        let mut parameters = parsed.parameters;
        parameters.extend(extract_query_parameters(&item.request.params));

        tracing::trace!(
            ?kind,
            request = %item.name,
            method = %item.request.method,
            path = %parsed.path,
            "adding operation"
        );
        self.paths.set_operation(
            &parsed.path,
            &item.request.method,
            Operation::new(tag, item.name.as_str(), parameters),
        );
        Ok(())
    }
}

/// Walks `items` and returns the paths and tags they produce.
///
/// # Errors
///
/// Returns [`PublishError::InvalidRequestUrl`] for the first request whose
/// URL cannot be parsed; nothing of the walk is returned in that case.
pub fn traverse(items: &[CollectionItem]) -> PublishResult<Traversal> {
    let mut traversal = Traversal::default();

    for item in items {
        if let CollectionItem::Folder(folder) = item {
            traversal.merge(traverse(&folder.items)?);
        } else if let Some((kind, request)) = item.as_request() {
            traversal.add_request(kind, request)?;
        }
    }

    Ok(traversal)
}

/// Derives a tag from a request's file path and depth.
///
/// The path is split on `/` and `\`; of the last `depth` segments the final
/// one (the request itself) is dropped and the rest are joined with
/// [`TAG_SEPARATOR`]. A root-level request yields an empty tag.
#[must_use]
pub fn derive_tag(pathname: &str, depth: usize) -> String {
    let segments: Vec<&str> = pathname
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect();

    let Some(end) = segments.len().checked_sub(1) else {
        return String::new();
    };
    let start = segments.len().saturating_sub(depth);
    if start >= end {
        return String::new();
    }

    segments[start..end].join(TAG_SEPARATOR)
}
