//! CDI alert diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! alert reconciliation crates, including structured error codes and the
//! diagnostics reported for incomplete account data.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for CDI alert operations
pub type Result<T> = std::result::Result<T, CdiError>;
