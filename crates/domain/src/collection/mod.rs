//! Collection tree types

mod item;

pub use item::{Collection, CollectionItem, Folder, RequestItem, RequestKind};
