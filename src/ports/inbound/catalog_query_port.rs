use crate::package_catalog::domain::PackageRecord;

/// CatalogQueryPort - Inbound port for reading the published catalog
///
/// This is everything a presentation layer needs: the sorted names, a
/// lookup, and a membership test. Implementations must answer every call
/// from one consistent catalog, never from a catalog being rebuilt.
pub trait CatalogQueryPort {
    /// Package names in sorted order
    fn all_names(&self) -> Vec<String>;

    /// Exact, case-sensitive lookup; `None` when the package is not installed
    fn find(&self, name: &str) -> Option<PackageRecord>;

    /// Membership test
    fn contains(&self, name: &str) -> bool;
}
