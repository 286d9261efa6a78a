//! Conversion of saved request URLs and query parameters into OpenAPI terms.

mod query;
mod template;

pub use query::extract_query_parameters;
pub use template::{EXAMPLE_HOST, ParsedPath, parse_pathname, parse_request_path};
