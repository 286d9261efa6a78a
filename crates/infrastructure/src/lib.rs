//! oapub Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: YAML rendering, file savers and the
//! collection file loader.

pub mod export;
pub mod persistence;
pub mod serialization;

pub use export::OpenApiYamlExporter;
pub use persistence::{
    CollectionLoadError, DirectoryFileSaver, StdoutFileSaver, StreamFileSaver, load_collection,
};
pub use serialization::{SerializationError, from_json, from_json_bytes};
