//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while deriving the document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request URL could not be parsed as an absolute URL.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl {
        /// The URL as it was handed to the parser.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A path segment could not be percent-decoded.
    #[error("invalid path segment `{segment}`: {reason}")]
    InvalidPathSegment {
        /// The raw (still encoded) segment.
        segment: String,
        /// Why decoding failed.
        reason: String,
    },
}

impl DomainError {
    /// Creates an [`DomainError::InvalidUrl`].
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
