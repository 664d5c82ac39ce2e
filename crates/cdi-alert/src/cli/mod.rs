//! CLI functionality for the cdi-alert tool
//!
//! This module contains all CLI-related functionality including:
//! - Configuration resolution
//! - Account loading
//! - Evaluation, linting and catalog listing
//! - Output formatting

pub mod accounts;
pub mod catalog;
pub mod evaluate;
pub mod lint;
pub mod output;
pub mod settings;
