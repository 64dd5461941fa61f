/// IndexMetadata value object describing a rendered index
#[derive(Debug, Clone)]
pub struct IndexMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    source_path: String,
}

impl IndexMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        source_path: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            source_path,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// Path of the status file the catalog was built from
    pub fn source_path(&self) -> &str {
        &self.source_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_metadata_new() {
        let metadata = IndexMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "dpkg-index".to_string(),
            "0.1.0".to_string(),
            "/var/lib/dpkg/status".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "dpkg-index");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.source_path(), "/var/lib/dpkg/status");
    }
}
