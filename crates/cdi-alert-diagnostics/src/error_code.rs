//! CDI error codes following a structured numbering system
//!
//! Error code ranges:
//! - CDI0001-CDI0099: Configuration errors (catalog, policy)
//! - CDI0100-CDI0199: Data quality findings (account and alert records)
//! - CDI0200-CDI0299: Evaluation setup errors
//! - CDI0400-CDI0499: System errors (I/O, decoding)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    pub const fn is_config_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    pub const fn is_data_quality(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    pub const fn is_system_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CDI{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Configuration errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid configuration"));
    map.insert(2, ErrorInfo::new("Empty criteria group name"));
    map.insert(
        3,
        ErrorInfo::new("Duplicate criteria group")
            .with_help("Each criteria group may appear once in the catalog"),
    );
    map.insert(4, ErrorInfo::new("Empty policy value"));
    map.insert(
        5,
        ErrorInfo::new("Assignment keyword is not word-bounded")
            .with_help("Whole-word matching needs a letter, digit or underscore at both ends"),
    );

    // Data quality (0100-0199)
    map.insert(
        101,
        ErrorInfo::new("Alert record without criteria group")
            .with_help("The record can never match a condition"),
    );
    map.insert(
        102,
        ErrorInfo::new("Duplicate alert records for criteria group")
            .with_help("Only the first record in sequence order is considered"),
    );
    map.insert(103, ErrorInfo::new("Link without text"));
    map.insert(
        104,
        ErrorInfo::new("Multiple documentation containers")
            .with_help("Only the first container's children are inspected"),
    );

    // Evaluation setup (0200-0299)
    map.insert(200, ErrorInfo::new("Invalid assignment keyword"));

    // System errors (0400-0499)
    map.insert(401, ErrorInfo::new("I/O error"));
    map.insert(404, ErrorInfo::new("File not found"));
    map.insert(406, ErrorInfo::new("Invalid format"));

    map
});

// Configuration errors
pub const CDI0001: ErrorCode = ErrorCode::new(1);
pub const CDI0002: ErrorCode = ErrorCode::new(2);
pub const CDI0003: ErrorCode = ErrorCode::new(3);
pub const CDI0004: ErrorCode = ErrorCode::new(4);
pub const CDI0005: ErrorCode = ErrorCode::new(5);

// Data quality
pub const CDI0101: ErrorCode = ErrorCode::new(101);
pub const CDI0102: ErrorCode = ErrorCode::new(102);
pub const CDI0103: ErrorCode = ErrorCode::new(103);
pub const CDI0104: ErrorCode = ErrorCode::new(104);

// Evaluation setup
pub const CDI0200: ErrorCode = ErrorCode::new(200);

// System errors
pub const CDI0401: ErrorCode = ErrorCode::new(401);
pub const CDI0404: ErrorCode = ErrorCode::new(404);
pub const CDI0406: ErrorCode = ErrorCode::new(406);
