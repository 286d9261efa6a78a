//! Request specification type

use serde::{Deserialize, Serialize};

use super::{QueryParam, QueryParams};

/// The parts of a saved request that feed the exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Target URL (may contain `{{variable}}` or `:param` placeholders)
    pub url: String,
    /// HTTP method as entered in the client
    pub method: String,
    /// Query parameters
    #[serde(default)]
    pub params: QueryParams,
}

impl RequestSpec {
    /// Creates a request specification with no query parameters.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            params: QueryParams::new(),
        }
    }

    /// Creates a GET request with the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Adds a query parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: QueryParam) -> Self {
        self.params.add(param);
        self
    }
}
