pub mod catalog;
pub mod diagnostic;
pub mod index_metadata;
pub mod package;
pub mod raw_record;

pub use catalog::{Catalog, CatalogError};
pub use diagnostic::{Diagnostic, MalformedReason};
pub use index_metadata::IndexMetadata;
pub use package::{Dependency, DependencyGroup, PackageName, PackageRecord};
pub use raw_record::RawRecord;
