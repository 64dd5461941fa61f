/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod catalog_request;
mod catalog_response;
mod output_format;

pub use catalog_request::{CatalogRequest, DEFAULT_STATUS_PATH};
pub use catalog_response::CatalogResponse;
pub use output_format::OutputFormat;
