//! Application error types

use oapub_domain::DomainError;
use thiserror::Error;

use crate::ports::ExportError;
use crate::validation::ValidationError;

/// Errors that abort publishing a collection.
///
/// A collection without OpenAPI metadata is not an error; see
/// [`PublishOutcome::NoMetadata`](crate::use_cases::PublishOutcome::NoMetadata).
#[derive(Debug, Error)]
pub enum PublishError {
    /// The `oa__*` metadata failed validation.
    #[error("invalid OpenAPI metadata: {0}")]
    Validation(#[from] ValidationError),

    /// A request URL could not be turned into a path template.
    #[error("request `{request}` has an unusable URL: {source}")]
    InvalidRequestUrl {
        /// Name of the offending request.
        request: String,
        /// The underlying domain error.
        #[source]
        source: DomainError,
    },

    /// Rendering or saving the document failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Result type alias for publishing operations.
pub type PublishResult<T> = Result<T, PublishError>;
