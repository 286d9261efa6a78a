//! Collection file loader.

use std::path::{Path, PathBuf};

use oapub_domain::Collection;

use crate::serialization::{SerializationError, from_json_bytes};

/// Error type for loading a collection file.
#[derive(Debug, thiserror::Error)]
pub enum CollectionLoadError {
    /// File not found.
    #[error("Collection file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid collection.
    #[error("Invalid collection file {path}: {source}")]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// Underlying error
        #[source]
        source: SerializationError,
    },
}

/// Reads and deserializes a collection JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid collection.
pub fn load_collection(path: &Path) -> Result<Collection, CollectionLoadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CollectionLoadError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => {
            CollectionLoadError::PermissionDenied(path.to_path_buf())
        }
        _ => CollectionLoadError::Io(e),
    })?;

    let collection: Collection =
        from_json_bytes(&bytes).map_err(|source| CollectionLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        collection = %collection.name,
        requests = collection.request_count(),
        "loaded collection"
    );
    Ok(collection)
}
