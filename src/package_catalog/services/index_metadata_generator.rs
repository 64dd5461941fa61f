use crate::package_catalog::domain::IndexMetadata;
use chrono::Utc;

/// Name reported in generated pages and documents
pub const TOOL_NAME: &str = "dpkg-index";

/// IndexMetadataGenerator service for page/document metadata
pub struct IndexMetadataGenerator;

impl IndexMetadataGenerator {
    /// Generates metadata stamped with the current time
    pub fn generate_metadata(tool_name: &str, tool_version: &str, source_path: &str) -> IndexMetadata {
        IndexMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            source_path.to_string(),
        )
    }

    /// Generates metadata with this tool's name and compile-time version
    pub fn generate_default_metadata(source_path: &str) -> IndexMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"), source_path)
    }
}
