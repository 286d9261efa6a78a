//! Document export port.

use oapub_domain::OpenApiDocument;
use thiserror::Error;

use super::{FileSaveError, SavedLocation};

/// MIME type of exported documents.
pub const YAML_MIME_TYPE: &str = "text/x-yaml";

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The rendered file could not be saved.
    #[error("Save error: {0}")]
    Save(#[from] FileSaveError),
}

/// A rendered document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// File name including extension
    pub file_name: String,
    /// MIME type of the contents
    pub mime_type: &'static str,
    /// File contents
    pub contents: String,
}

impl ExportedFile {
    /// Creates a `<collection_name>.yml` file.
    #[must_use]
    pub fn yaml(collection_name: &str, contents: String) -> Self {
        Self {
            file_name: format!("{collection_name}.yml"),
            mime_type: YAML_MIME_TYPE,
            contents,
        }
    }
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Name of the exported file
    pub file_name: String,
    /// MIME type of the exported file
    pub mime_type: &'static str,
    /// Size of the contents in bytes
    pub bytes: usize,
    /// Where the file was saved
    pub location: SavedLocation,
}

/// Renders a finished document and hands it to the user.
pub trait DocumentExporter {
    /// Exports `document` under the collection's name.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or saving fails.
    fn export(
        &self,
        collection_name: &str,
        document: &OpenApiDocument,
    ) -> Result<ExportReceipt, ExportError>;
}

impl<T: DocumentExporter + ?Sized> DocumentExporter for &T {
    fn export(
        &self,
        collection_name: &str,
        document: &OpenApiDocument,
    ) -> Result<ExportReceipt, ExportError> {
        (**self).export(collection_name, document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_file_naming() {
        let file = ExportedFile::yaml("Pet Store", "openapi: 3.0.3\n".to_string());
        assert_eq!(file.file_name, "Pet Store.yml");
        assert_eq!(file.mime_type, "text/x-yaml");
    }
}
