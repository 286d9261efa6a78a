//! Server URL validation.

use super::rules::is_absolute_url;

/// Checks that a candidate server URL is present and absolute.
///
/// Never fails; an unusable candidate is simply `false`.
#[must_use]
pub fn is_valid_server_url(candidate: &str) -> bool {
    !candidate.trim().is_empty() && is_absolute_url(candidate)
}
