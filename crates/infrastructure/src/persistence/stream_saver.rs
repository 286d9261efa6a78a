//! Writes exported files to an output stream.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use oapub_application::{ExportedFile, FileSaveError, FileSaver, SavedLocation};

/// Writes the contents of each exported file to a writer.
///
/// The file name is not written; only the contents.
#[derive(Debug)]
pub struct StreamFileSaver<W: Write> {
    writer: Mutex<W>,
}

/// Stream saver over the process's standard output.
pub type StdoutFileSaver = StreamFileSaver<Stdout>;

impl<W: Write> StreamFileSaver<W> {
    /// Creates a saver writing to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the saver and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StdoutFileSaver {
    /// Creates a saver writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FileSaver for StreamFileSaver<W> {
    fn save(&self, file: &ExportedFile) -> Result<SavedLocation, FileSaveError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(file.contents.as_bytes())?;
        writer.flush()?;

        tracing::debug!(file = %file.file_name, bytes = file.contents.len(), "wrote file to stream");
        Ok(SavedLocation::Stream)
    }
}
