// src/core/mod.rs

//! Core data structures and primitives

// Declare modules within core
pub mod bits;
pub mod error;
pub mod param;

// Re-export public types for convenient access via `rydberg::core::TypeName`
pub use bits::{flip, log2i, readbit};
pub use error::RydbergError;
pub use param::Param;
