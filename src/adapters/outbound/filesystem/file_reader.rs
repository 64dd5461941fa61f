use crate::ports::outbound::StatusFileReader;
use crate::shared::error::IndexError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the dpkg status file
///
/// This adapter implements the StatusFileReader port. The file is read as
/// raw bytes so the parser can decide how to treat non-text content.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<Vec<u8>> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFileReader for FileSystemReader {
    fn read_status_file(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(IndexError::StatusFileNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Run on a Debian-based system, or specify a status file with the --status option.",
                    path.display()
                ),
            }
            .into());
        }

        self.safe_read_file(path, "status file").map_err(|e| {
            IndexError::StatusFileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_status_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let status_path = temp_dir.path().join("status");
        fs::write(&status_path, "Package: bash\n").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_status_file(&status_path).unwrap();

        assert_eq!(content, b"Package: bash\n");
    }

    #[test]
    fn test_read_status_file_keeps_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let status_path = temp_dir.path().join("status");
        fs::write(&status_path, [0xffu8, 0x00, 0x01]).unwrap();

        let content = FileSystemReader::new().read_status_file(&status_path).unwrap();

        assert_eq!(content, vec![0xff, 0x00, 0x01]);
    }

    #[test]
    fn test_read_status_file_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_status_file(&temp_dir.path().join("status"));

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("dpkg status file not found"));
        assert!(err_string.contains("--status"));
    }

    #[test]
    fn test_read_status_file_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::default().read_status_file(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read dpkg status file"));
        assert!(err_string.contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_status_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real_status");
        fs::write(&target, "Package: bash\n").unwrap();
        let link = temp_dir.path().join("status");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_status_file(&link);

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }
}
