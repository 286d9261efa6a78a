//! Application use cases (pipeline orchestration).

mod assemble_document;
mod publish_collection;

pub use assemble_document::*;
pub use publish_collection::*;
