//! Validation of the OpenAPI metadata and server URLs.
//!
//! Each record shape has an explicit validation function returning
//! `Result<normalized, ValidationError>`; nothing is registered globally.

mod error;
mod info;
mod rules;
mod server;
mod version;

pub use error::{ValidationError, Violation};
pub use info::{InfoSectionValidator, ValidatedInfo};
pub use rules::{is_absolute_url, is_email};
pub use server::is_valid_server_url;
pub use version::{SemverNormalizer, VersionNormalizer};
