//! `OpenAPI` 3.0 YAML exporter.
//!
//! Renders an [`OpenApiDocument`] to YAML and saves it as
//! `<collection name>.yml` through a [`FileSaver`].

use oapub_application::{DocumentExporter, ExportError, ExportReceipt, ExportedFile, FileSaver};
use oapub_domain::OpenApiDocument;

/// `OpenAPI` 3.0 YAML exporter.
#[derive(Debug, Clone, Default)]
pub struct OpenApiYamlExporter<S: FileSaver> {
    saver: S,
}

impl<S: FileSaver> OpenApiYamlExporter<S> {
    /// Creates an exporter that saves through `saver`.
    #[must_use]
    pub const fn new(saver: S) -> Self {
        Self { saver }
    }

    /// Renders `document` to YAML text.
    ///
    /// Keys keep the document's field order and `paths` keep insertion
    /// order, so equal documents render to identical text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML encoder rejects the document.
    pub fn render(document: &OpenApiDocument) -> Result<String, ExportError> {
        serde_yaml::to_string(document).map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

impl<S: FileSaver> DocumentExporter for OpenApiYamlExporter<S> {
    fn export(
        &self,
        collection_name: &str,
        document: &OpenApiDocument,
    ) -> Result<ExportReceipt, ExportError> {
        let file = ExportedFile::yaml(collection_name, Self::render(document)?);
        let location = self.saver.save(&file)?;

        Ok(ExportReceipt {
            bytes: file.contents.len(),
            file_name: file.file_name,
            mime_type: file.mime_type,
            location,
        })
    }
}
