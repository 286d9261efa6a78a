//! Query parameter extraction.

use oapub_domain::{Parameter, QueryParams};

/// One optional string query parameter per enabled entry, in order.
#[must_use]
pub fn extract_query_parameters(params: &QueryParams) -> Vec<Parameter> {
    params
        .enabled()
        .map(|param| Parameter::query(param.name.as_str()))
        .collect()
}
