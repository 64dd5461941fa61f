/// Application layer - Use cases and DTOs
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod catalog_handle;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
