use crate::package_catalog::domain::{Catalog, Diagnostic, IndexMetadata};
use std::sync::Arc;

/// CatalogResponse - Response DTO from the catalog build use case
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    /// The fully built, sorted catalog
    pub catalog: Arc<Catalog>,
    /// Metadata for rendering (timestamp, tool info, source path)
    pub metadata: IndexMetadata,
    /// Lines and records skipped while parsing and normalizing
    pub diagnostics: Vec<Diagnostic>,
}

impl CatalogResponse {
    pub fn new(catalog: Arc<Catalog>, metadata: IndexMetadata, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            catalog,
            metadata,
            diagnostics,
        }
    }
}
