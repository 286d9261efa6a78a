//! JSON deserialization for collection files.
//!
//! Collections are read with `serde_json` in `preserve_order` mode so that
//! `collectionVariables` keep the order they were written in.

mod json;

pub use json::*;
