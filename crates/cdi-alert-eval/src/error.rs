//! Evaluation setup errors
//!
//! Evaluation itself never fails. These errors come from building an
//! evaluator out of policy literals.

use cdi_alert_diagnostics::{CdiError, CDI0200};
use thiserror::Error;

/// Result type for evaluator construction
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment keyword is blank
    #[error("Assignment keyword must not be empty")]
    EmptyKeyword,

    /// The keyword starts or ends with a non-word character, so it can never match as a whole word
    #[error("Assignment keyword '{0}' must start and end with a letter, digit or underscore")]
    UnboundedKeyword(String),

    /// The keyword did not compile into a word-boundary pattern
    #[error("Invalid assignment keyword '{keyword}': {message}")]
    InvalidKeyword { keyword: String, message: String },
}

impl From<EvalError> for CdiError {
    fn from(err: EvalError) -> Self {
        CdiError::evaluation(CDI0200, err.to_string())
    }
}
