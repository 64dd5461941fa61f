//! dpkg-index - browse the packages recorded in a dpkg status database
//!
//! This library parses the Debian control-file format used by
//! `/var/lib/dpkg/status`, keeps the fields a package index needs, derives
//! reverse dependencies and renders the result as HTML pages or JSON,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`package_catalog`): Parser, normalizer and catalog
//! - **Application Layer** (`application`): Use cases, read models and the published catalog handle
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dpkg_index::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let status_file_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildCatalogUseCase::new(status_file_reader, progress_reporter);
//!
//! // Execute
//! let request = CatalogRequest::new(PathBuf::from("/var/lib/dpkg/status"));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = CatalogReadModelBuilder::build(&response.catalog, &response.metadata);
//! let output = HtmlFormatter::new().format_index(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod package_catalog;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{HtmlFormatter, HtmlOptions, JsonFormatter};
    pub use crate::application::catalog_handle::CatalogHandle;
    pub use crate::application::dto::{CatalogRequest, CatalogResponse, OutputFormat};
    pub use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
    pub use crate::application::use_cases::BuildCatalogUseCase;
    pub use crate::package_catalog::domain::{
        Catalog, CatalogError, Dependency, DependencyGroup, Diagnostic, IndexMetadata,
        PackageName, PackageRecord, RawRecord,
    };
    pub use crate::package_catalog::policies::FieldAllowList;
    pub use crate::package_catalog::services::{
        ControlFileParser, DependsParser, RecordNormalizer,
    };
    pub use crate::ports::inbound::CatalogQueryPort;
    pub use crate::ports::outbound::{
        IndexFormatter, OutputPresenter, ProgressReporter, StatusFileReader,
    };
    pub use crate::shared::Result;
}
