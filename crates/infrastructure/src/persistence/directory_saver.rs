//! Saves exported files into a directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use oapub_application::{ExportedFile, FileSaveError, FileSaver, SavedLocation};

/// Writes exported files into a directory, creating it if missing.
///
/// An existing file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectoryFileSaver {
    dir: PathBuf,
}

impl DirectoryFileSaver {
    /// Creates a saver targeting `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// A file name must be a single, ordinary path component.
fn check_file_name(name: &str) -> Result<(), FileSaveError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(FileSaveError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

fn map_io(path: &Path, e: std::io::Error) -> FileSaveError {
    if e.kind() == ErrorKind::PermissionDenied {
        FileSaveError::PermissionDenied(path.to_path_buf())
    } else {
        FileSaveError::Io(e)
    }
}

impl FileSaver for DirectoryFileSaver {
    fn save(&self, file: &ExportedFile) -> Result<SavedLocation, FileSaveError> {
        check_file_name(&file.file_name)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| map_io(&self.dir, e))?;
        let path = self.dir.join(&file.file_name);
        std::fs::write(&path, file.contents.as_bytes()).map_err(|e| map_io(&path, e))?;

        tracing::debug!(path = %path.display(), mime = file.mime_type, "saved file");
        Ok(SavedLocation::File(path))
    }
}
