//! Validation error types

use std::fmt;

use thiserror::Error;

/// The kind of rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The field is missing, null or empty.
    Required,
    /// The field is not an absolute URL.
    InvalidUrl,
    /// The field is not an email address.
    InvalidEmail,
    /// A scalar was expected but an object or array was found.
    NotAString,
    /// An object was expected but a scalar or array was found.
    NotAnObject,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Required => "is a required field",
            Self::InvalidUrl => "must be a valid URL",
            Self::InvalidEmail => "must be a valid email",
            Self::NotAString => "must be a `string` type",
            Self::NotAnObject => "must be a `object` type",
        };
        f.write_str(message)
    }
}

/// The first rule violation found in a metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path} {violation}")]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `license.name`.
    pub path: String,
    /// What was wrong with it.
    pub violation: Violation,
}

impl ValidationError {
    /// Creates a new validation error.
    #[must_use]
    pub fn new(path: impl Into<String>, violation: Violation) -> Self {
        Self {
            path: path.into(),
            violation,
        }
    }
}
