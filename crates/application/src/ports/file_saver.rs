//! File saving port.

use std::fmt;
use std::path::PathBuf;

use super::ExportedFile;

/// Error type for file saving operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSaveError {
    /// The file name cannot be used as a single path component.
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a saved file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedLocation {
    /// Written to a file on disk.
    File(PathBuf),
    /// Written to an output stream.
    Stream,
}

impl fmt::Display for SavedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stream => f.write_str("<stream>"),
        }
    }
}

/// Hands an exported file to whatever offers it to the user.
///
/// This trait allows swapping the destination (directory, stdout, memory)
/// and mocking it in tests.
pub trait FileSaver {
    /// Saves `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, file: &ExportedFile) -> Result<SavedLocation, FileSaveError>;
}

impl<T: FileSaver + ?Sized> FileSaver for &T {
    fn save(&self, file: &ExportedFile) -> Result<SavedLocation, FileSaveError> {
        (**self).save(file)
    }
}
