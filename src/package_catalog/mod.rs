//! Domain layer: control-file parsing, record normalization and the
//! package catalog. Nothing in here performs I/O.

pub mod domain;
pub mod policies;
pub mod services;
