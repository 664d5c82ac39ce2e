//! CDI alert data model
//!
//! This crate provides:
//! - The account and alert-history types supplied by the host platform
//! - The reconciliation policy literals and per-group overrides
//! - The criteria-group catalog and its TOML configuration
//! - Account source traits for loading accounts from storage

pub mod account;
pub mod catalog;
pub mod config;
pub mod policy;
pub mod source;

pub use account::*;
pub use catalog::*;
pub use config::*;
pub use policy::*;
pub use source::*;
