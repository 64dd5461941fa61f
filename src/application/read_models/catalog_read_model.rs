//! Catalog read model for query operations

use super::package_view::PackageView;

/// Main read model handed to formatters
#[derive(Debug, Clone)]
pub struct CatalogReadModel {
    pub metadata: IndexMetadataView,
    /// Packages sorted by name
    pub packages: Vec<PackageView>,
}

impl CatalogReadModel {
    /// Package names in sorted order
    pub fn package_names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn find_package(&self, name: &str) -> Option<&PackageView> {
        self.packages
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .map(|position| &self.packages[position])
    }
}

/// View representation of the index metadata
#[derive(Debug, Clone)]
pub struct IndexMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub source_path: String,
}
