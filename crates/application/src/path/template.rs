//! Templated request URL to OpenAPI path template.
//!
//! Request URLs use `{{name}}` or `:name` placeholders; OpenAPI wants
//! `{name}` segments plus a path parameter per placeholder.

use std::sync::LazyLock;

use oapub_domain::{DomainError, DomainResult, Parameter};
use regex::Regex;
use url::Url;

/// Host substituted for `{{base_url}}` so the URL parses as absolute.
pub const EXAMPLE_HOST: &str = "http://example.com";

#[allow(clippy::expect_used)]
static BASE_URL_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{\{base_url\}\}").expect("valid regex"));

#[allow(clippy::expect_used)]
static TEMPLATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|:").expect("valid regex"));

/// A path template with the parameters it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    /// OpenAPI path template, e.g. `/users/{id}`
    pub path: String,
    /// Required path parameters in segment order
    pub parameters: Vec<Parameter>,
}

/// Parses a request URL into a path template.
///
/// `{{base_url}}` (any case) is replaced by [`EXAMPLE_HOST`] before parsing;
/// the host never shows up in the result.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] if the URL is not absolute once the
/// placeholder is substituted, or a segment error from [`parse_pathname`].
pub fn parse_request_path(url: &str) -> DomainResult<ParsedPath> {
    let absolute = BASE_URL_PLACEHOLDER.replace_all(url, EXAMPLE_HOST);
    let parsed = Url::parse(&absolute).map_err(|e| DomainError::invalid_url(url, e))?;
    parse_pathname(parsed.path())
}

/// Converts a (possibly percent-encoded) pathname into a path template.
///
/// Empty segments are dropped. A segment containing `{{`, `}}` or `:` is a
/// placeholder: every marker is stripped in one pass and what remains is the
/// parameter name.
///
/// ```
/// use oapub_application::path::parse_pathname;
///
/// let parsed = parse_pathname("/users/{{id}}/posts/:postId").unwrap();
/// assert_eq!(parsed.path, "/users/{id}/posts/{postId}");
/// assert_eq!(parsed.parameters.len(), 2);
/// ```
///
/// # Errors
///
/// Returns [`DomainError::InvalidPathSegment`] if a segment has a `%` not
/// followed by two hex digits, or does not decode to UTF-8.
pub fn parse_pathname(pathname: &str) -> DomainResult<ParsedPath> {
    let mut path = String::new();
    let mut parameters = Vec::new();

    for raw in pathname.split('/').filter(|s| !s.is_empty()) {
        if has_malformed_escape(raw) {
            return Err(DomainError::InvalidPathSegment {
                segment: raw.to_string(),
                reason: "malformed percent-encoding".to_string(),
            });
        }
        let segment = urlencoding::decode(raw).map_err(|e| DomainError::InvalidPathSegment {
            segment: raw.to_string(),
            reason: e.to_string(),
        })?;

        path.push('/');
        if TEMPLATE_MARKER.is_match(&segment) {
            let name = TEMPLATE_MARKER.replace_all(&segment, "");
            path.push('{');
            path.push_str(&name);
            path.push('}');
            parameters.push(Parameter::path(name));
        } else {
            path.push_str(&segment);
        }
    }

    Ok(ParsedPath { path, parameters })
}

/// True if some `%` is not followed by two hex digits.
fn has_malformed_escape(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use oapub_domain::ParameterLocation;
    use pretty_assertions::assert_eq;

    fn names(parsed: &ParsedPath) -> Vec<&str> {
        parsed.parameters.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_both_placeholder_forms() {
        let parsed = parse_pathname("/users/{{id}}/posts/:postId").unwrap();

        assert_eq!(parsed.path, "/users/{id}/posts/{postId}");
        assert_eq!(parsed.parameters, vec![Parameter::path("id"), Parameter::path("postId")]);
        assert!(parsed
            .parameters
            .iter()
            .all(|p| p.required && p.location == ParameterLocation::Path));
    }

    #[test]
    fn test_full_url_with_base_url() {
        let parsed = parse_request_path("{{base_url}}/users/{{id}}").unwrap();
        assert_eq!(parsed.path, "/users/{id}");
        assert_eq!(names(&parsed), ["id"]);
    }

    #[test]
    fn test_base_url_placeholder_is_case_insensitive() {
        let parsed = parse_request_path("{{BASE_URL}}/health").unwrap();
        assert_eq!(parsed.path, "/health");
        assert!(parsed.parameters.is_empty());
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let parsed = parse_request_path("https://api.test/search?q={{term}}#top").unwrap();
        assert_eq!(parsed.path, "/search");
        assert!(parsed.parameters.is_empty());
    }

    #[test]
    fn test_duplicate_slashes_collapse() {
        let parsed = parse_request_path("http://api.test//v1///items/").unwrap();
        assert_eq!(parsed.path, "/v1/items");
    }

    #[test]
    fn test_root_url_yields_empty_path() {
        let parsed = parse_request_path("{{base_url}}").unwrap();
        assert_eq!(parsed.path, "");
    }

    #[test]
    fn test_literal_segments_are_decoded() {
        let parsed = parse_request_path("http://api.test/files/my%20report.pdf").unwrap();
        assert_eq!(parsed.path, "/files/my report.pdf");
    }

    #[test]
    fn test_colon_inside_segment_is_a_placeholder() {
        let parsed = parse_pathname("/v1/items:batch").unwrap();
        assert_eq!(parsed.path, "/v1/{itemsbatch}");
        assert_eq!(names(&parsed), ["itemsbatch"]);
    }

    #[test]
    fn test_mixed_markers_may_leave_empty_name() {
        let parsed = parse_pathname("/a/{{:}}").unwrap();
        assert_eq!(parsed.path, "/a/{}");
        assert_eq!(names(&parsed), [""]);
    }

    #[test]
    fn test_malformed_escape_fails() {
        let err = parse_request_path("http://a.test/users/%zz").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidPathSegment { ref segment, .. } if segment == "%zz"
        ));
        assert!(parse_pathname("/users/50%").is_err());
        assert!(parse_pathname("/users/%4").is_err());
    }

    #[test]
    fn test_invalid_utf8_escape_fails() {
        let err = parse_request_path("http://a.test/users/%E0%A4%A").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPathSegment { .. }));

        let err = parse_pathname("/files/%FF").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPathSegment { .. }));
    }

    #[test]
    fn test_lowercase_hex_escape_decodes() {
        let parsed = parse_pathname("/caf%c3%a9").unwrap();
        assert_eq!(parsed.path, "/café");
    }

    #[test]
    fn test_unresolved_host_variable_fails() {
        let err = parse_request_path("{{host}}/users").unwrap_err();
        assert!(matches!(err, DomainError::InvalidUrl { .. }));
    }
}
