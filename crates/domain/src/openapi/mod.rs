//! OpenAPI 3.0 document model.
//!
//! Only the subset the publisher emits is modelled. Field order of the
//! structs is the key order of the rendered document.

mod document;
mod paths;

pub use document::{
    Contact, ExternalDocs, Info, License, OPENAPI_VERSION, OpenApiDocument, Server, Tag, TagSet,
};
pub use paths::{Operation, Parameter, ParameterLocation, PathItem, Paths, Schema};
