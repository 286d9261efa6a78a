//! Publish collection use case.

use oapub_domain::Collection;

use crate::error::PublishResult;
use crate::ports::{DocumentExporter, ExportReceipt};
use crate::use_cases::AssembleDocument;
use crate::validation::{SemverNormalizer, VersionNormalizer};

/// Summary of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    /// What the exporter produced
    pub receipt: ExportReceipt,
    /// Number of path templates
    pub paths: usize,
    /// Number of operations across all paths
    pub operations: usize,
    /// Number of tags
    pub tags: usize,
    /// Number of servers
    pub servers: usize,
}

/// Result of running [`PublishCollection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The collection has no `oa__*` metadata; nothing was exported.
    NoMetadata,
    /// The document was assembled and exported.
    Published(PublishReport),
}

/// Use case for assembling a collection's document and exporting it.
pub struct PublishCollection<E: DocumentExporter, N = SemverNormalizer> {
    assembler: AssembleDocument<N>,
    exporter: E,
}

impl<E: DocumentExporter> PublishCollection<E> {
    /// Creates a new `PublishCollection` use case.
    #[must_use]
    pub const fn new(exporter: E) -> Self {
        Self {
            assembler: AssembleDocument::new(),
            exporter,
        }
    }
}

impl<E: DocumentExporter, N: VersionNormalizer> PublishCollection<E, N> {
    /// Creates the use case around a specific assembler.
    #[must_use]
    pub const fn with_assembler(assembler: AssembleDocument<N>, exporter: E) -> Self {
        Self {
            assembler,
            exporter,
        }
    }

    /// Assembles the document and hands it to the exporter.
    ///
    /// # Errors
    /// - Returns error if the metadata is invalid
    /// - Returns error if a request URL cannot be parsed
    /// - Returns error if rendering or saving the document fails
    pub fn execute(&self, collection: &Collection) -> PublishResult<PublishOutcome> {
        let Some(document) = self.assembler.execute(collection)? else {
            return Ok(PublishOutcome::NoMetadata);
        };

        let receipt = self.exporter.export(&collection.name, &document)?;
        tracing::info!(
            collection = %collection.name,
            file = %receipt.file_name,
            location = %receipt.location,
            bytes = receipt.bytes,
            "exported OpenAPI document"
        );

        Ok(PublishOutcome::Published(PublishReport {
            receipt,
            paths: document.paths.len(),
            operations: document.paths.operation_count(),
            tags: document.tags.len(),
            servers: document.servers.len(),
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::PublishError;
    use crate::ports::{ExportError, FileSaveError, SavedLocation, YAML_MIME_TYPE};
    use oapub_domain::{CollectionItem, OpenApiDocument, RequestItem, RequestSpec};
    use serde_json::json;

    /// Records the documents it is asked to export.
    #[derive(Default)]
    struct RecordingExporter {
        exported: RefCell<Vec<(String, OpenApiDocument)>>,
        fail: bool,
    }

    impl DocumentExporter for RecordingExporter {
        fn export(
            &self,
            collection_name: &str,
            document: &OpenApiDocument,
        ) -> Result<ExportReceipt, ExportError> {
            if self.fail {
                return Err(ExportError::Save(FileSaveError::InvalidFileName(
                    collection_name.to_string(),
                )));
            }
            self.exported
                .borrow_mut()
                .push((collection_name.to_string(), document.clone()));
            Ok(ExportReceipt {
                file_name: format!("{collection_name}.yml"),
                mime_type: YAML_MIME_TYPE,
                bytes: 42,
                location: SavedLocation::Stream,
            })
        }
    }

    fn collection(with_metadata: bool) -> Collection {
        let mut collection = Collection::new("Shop");
        if with_metadata {
            collection.collection_variables = [("oa__title", json!("Shop"))].into_iter().collect();
        }
        collection.add_item(CollectionItem::HttpRequest(RequestItem::new(
            "Orders",
            "shop/Orders.bru",
            1,
            RequestSpec::get("https://shop.test/orders/:orderId"),
        )));
        collection.add_item(CollectionItem::HttpRequest(RequestItem::new(
            "Cancel",
            "shop/Cancel.bru",
            1,
            RequestSpec::new("DELETE", "https://shop.test/orders/:orderId"),
        )));
        collection
    }

    #[test]
    fn test_publish_exports_document() {
        let exporter = RecordingExporter::default();
        let outcome = PublishCollection::new(&exporter)
            .execute(&collection(true))
            .unwrap();

        let PublishOutcome::Published(report) = outcome else {
            panic!("expected a published outcome");
        };
        assert_eq!(report.receipt.file_name, "Shop.yml");
        assert_eq!(report.paths, 1);
        assert_eq!(report.operations, 2);
        assert_eq!(report.tags, 0);
        assert_eq!(report.servers, 0);

        let exported = exporter.exported.borrow();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].0, "Shop");
        assert!(exported[0].1.paths.get("/orders/{orderId}").is_some());
    }

    #[test]
    fn test_no_metadata_skips_export() {
        let exporter = RecordingExporter::default();
        let outcome = PublishCollection::new(&exporter)
            .execute(&collection(false))
            .unwrap();

        assert_eq!(outcome, PublishOutcome::NoMetadata);
        assert!(exporter.exported.borrow().is_empty());
    }

    #[test]
    fn test_export_failure_surfaces() {
        let exporter = RecordingExporter {
            fail: true,
            ..RecordingExporter::default()
        };

        let err = PublishCollection::new(&exporter)
            .execute(&collection(true))
            .unwrap_err();
        assert!(matches!(err, PublishError::Export(ExportError::Save(_))));
    }
}
