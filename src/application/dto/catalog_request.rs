use std::path::PathBuf;

/// Default location of the dpkg status database
pub const DEFAULT_STATUS_PATH: &str = "/var/lib/dpkg/status";

/// CatalogRequest - Request DTO for the catalog build use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Path to the dpkg status file
    pub status_path: PathBuf,
}

impl CatalogRequest {
    pub fn new(status_path: PathBuf) -> Self {
        Self { status_path }
    }
}

impl Default for CatalogRequest {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_STATUS_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_uses_system_status_file() {
        let request = CatalogRequest::default();
        assert_eq!(request.status_path, PathBuf::from("/var/lib/dpkg/status"));
    }
}
