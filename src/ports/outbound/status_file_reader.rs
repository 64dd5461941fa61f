use crate::shared::Result;
use std::path::Path;

/// StatusFileReader port for reading the dpkg status database
///
/// The parsing core works on an in-memory blob; this port is the only
/// place where the status file is touched.
pub trait StatusFileReader {
    /// Reads the status file at `path`
    ///
    /// # Returns
    /// The raw bytes of the file. Decoding is left to the parser, which
    /// treats non-text content as an empty database.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_status_file(&self, path: &Path) -> Result<Vec<u8>>;
}
