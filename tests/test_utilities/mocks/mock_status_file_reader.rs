use std::path::Path;
use dpkg_index::prelude::*;

/// Mock StatusFileReader for testing
pub struct MockStatusFileReader {
    pub content: Vec<u8>,
    pub should_fail: bool,
}

impl MockStatusFileReader {
    pub fn new(content: &str) -> Self {
        Self::from_bytes(content.as_bytes().to_vec())
    }

    pub fn from_bytes(content: Vec<u8>) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
        }
    }
}

impl StatusFileReader for MockStatusFileReader {
    fn read_status_file(&self, _path: &Path) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock status file read failure");
        }
        Ok(self.content.clone())
    }
}
