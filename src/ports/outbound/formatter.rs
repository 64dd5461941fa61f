use crate::application::read_models::{CatalogReadModel, PackageView};
use crate::shared::Result;

/// IndexFormatter port for rendering the catalog
///
/// This port abstracts the rendering of the catalog read model into an
/// output format (HTML pages, JSON document).
pub trait IndexFormatter {
    /// Renders the listing of every package
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn format_index(&self, model: &CatalogReadModel) -> Result<String>;

    /// Renders the detail view of a single package
    ///
    /// # Arguments
    /// * `model` - The catalog read model, for metadata and cross-links
    /// * `package` - The package to render
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn format_package(&self, model: &CatalogReadModel, package: &PackageView) -> Result<String>;
}
