/// Shared kernel - error types, result alias and input-safety helpers
/// used across every layer.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
