//! Field-level syntax checks shared by the validators.

use url::Url;
use validator::ValidateEmail;

/// Schemes accepted in URL fields.
const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Returns true if `candidate` parses as an absolute `http`, `https` or `ftp`
/// URL with a host.
#[must_use]
pub fn is_absolute_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .is_ok_and(|url| url.has_host() && URL_SCHEMES.contains(&url.scheme()))
}

/// Returns true if `candidate` is a syntactically valid email address.
#[must_use]
pub fn is_email(candidate: &str) -> bool {
    candidate.validate_email()
}
