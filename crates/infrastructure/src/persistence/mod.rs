//! File-based adapters: collection loading and exported file saving.

mod collection_file;
mod directory_saver;
mod stream_saver;

pub use collection_file::{CollectionLoadError, load_collection};
pub use directory_saver::DirectoryFileSaver;
pub use stream_saver::{StdoutFileSaver, StreamFileSaver};
