//! oapub Application - Publishing pipeline and ports
//!
//! This crate turns a [`Collection`](oapub_domain::Collection) into an
//! OpenAPI document:
//! - Metadata key-path expansion and validation
//! - Request URL and query parameter conversion
//! - Collection traversal into paths and tags
//! - Use cases and the ports they export through

pub mod error;
pub mod metadata;
pub mod path;
pub mod ports;
pub mod traversal;
pub mod use_cases;
pub mod validation;

pub use error::{PublishError, PublishResult};
pub use ports::{
    DocumentExporter, ExportError, ExportReceipt, ExportedFile, FileSaveError, FileSaver,
    SavedLocation,
};
pub use use_cases::{AssembleDocument, PublishCollection, PublishOutcome, PublishReport};
pub use validation::{
    InfoSectionValidator, SemverNormalizer, ValidatedInfo, ValidationError, VersionNormalizer,
};
