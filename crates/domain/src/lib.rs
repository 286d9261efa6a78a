//! oapub Domain - Core data types
//!
//! This crate defines the data model for the oapub collection publisher:
//! the collection tree read from an API client, the flat metadata record
//! and the OpenAPI 3.0 document produced from them.
//! All types here are pure Rust with no I/O dependencies.

pub mod collection;
pub mod environment;
pub mod error;
pub mod metadata;
pub mod openapi;
pub mod request;

pub use collection::{Collection, CollectionItem, Folder, RequestItem, RequestKind};
pub use environment::{Environment, EnvironmentVariable};
pub use error::{DomainError, DomainResult};
pub use metadata::FlatMetadata;
pub use openapi::{
    Contact, ExternalDocs, Info, License, OpenApiDocument, Operation, Parameter,
    ParameterLocation, PathItem, Paths, Schema, Server, Tag, TagSet,
};
pub use request::{QueryParam, QueryParams, RequestSpec};
