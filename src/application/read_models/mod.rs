//! Read models for the presentation side
//!
//! This module contains view-optimized structs that give formatters a
//! denormalized, ready-to-render copy of the catalog.

pub mod catalog_read_model;
pub mod catalog_read_model_builder;
pub mod package_view;

pub use catalog_read_model::{CatalogReadModel, IndexMetadataView};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
pub use package_view::{DependencyGroupView, DependencyView, PackageView};
