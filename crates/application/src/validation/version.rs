//! Version normalization for the `info.version` field.

use semver::Version;

/// Transforms a raw `version` value before it lands in the document.
///
/// Returning `None` nulls the field; it is never a validation failure.
pub trait VersionNormalizer {
    /// Normalizes `version`.
    fn normalize(&self, version: &str) -> Option<String>;
}

impl<F> VersionNormalizer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn normalize(&self, version: &str) -> Option<String> {
        self(version)
    }
}

/// Keeps versions that are valid semantic versions, nulls everything else.
///
/// Surrounding whitespace and a single leading `v` are tolerated when
/// checking; the value is kept as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverNormalizer;

impl VersionNormalizer for SemverNormalizer {
    fn normalize(&self, version: &str) -> Option<String> {
        let trimmed = version.trim();
        let candidate = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(candidate).ok().map(|_| version.to_string())
    }
}
