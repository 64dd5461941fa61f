/// Use cases module containing application business logic orchestration
mod build_catalog;

pub use build_catalog::BuildCatalogUseCase;
