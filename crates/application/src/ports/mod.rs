//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the publishing pipeline and the
//! outside world. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod exporter;
mod file_saver;

pub use exporter::{DocumentExporter, ExportError, ExportReceipt, ExportedFile, YAML_MIME_TYPE};
pub use file_saver::{FileSaveError, FileSaver, SavedLocation};
