/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI,
/// a page server) use to query the application core.
pub mod catalog_query_port;

pub use catalog_query_port::CatalogQueryPort;
