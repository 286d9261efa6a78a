//! Export infrastructure.
//!
//! This module renders assembled documents and hands them to a file saver.

mod openapi;

pub use openapi::OpenApiYamlExporter;
