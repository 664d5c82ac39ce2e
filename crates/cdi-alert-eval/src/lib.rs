//! CDI Alert Reconciliation
//!
//! Given an account's previously recorded alerts, decides whether a named
//! condition should be (re)raised or suppressed, and whether coding evidence
//! is already linked. Whether the clinical criteria are met is decided
//! elsewhere; this crate only reconciles against alert history.
//!
//! # Example
//!
//! ```
//! use cdi_alert_eval::AlertEvaluator;
//! use cdi_alert_model::{Account, MatchedCriteriaGroup};
//!
//! let account = Account::new("A1001")
//!     .with_alert(MatchedCriteriaGroup::new("Pneumonia").with_outcome("AUTORESOLVED"));
//!
//! let result = AlertEvaluator::new().evaluate(&account, "Pneumonia");
//! assert!(result.alert_triggered);
//! assert!(!result.trigger_alert);
//! ```
//!
//! # Architecture
//!
//! One evaluation runs four steps over the account, in order:
//!
//! - `scanner`: finds the first alert record for the criteria group
//! - `resolution`: decides whether that record suppresses re-triggering
//! - `evidence`: checks the record's documentation links for an assigned code
//! - `result`: assembles the flags and passthrough fields
//!
//! `AlertEvaluator` ties these together per criteria group and across a
//! catalog. `report` compares successive catalog passes and `lint` reports
//! incomplete data that evaluation silently tolerates.

pub mod engine;
pub mod error;
pub mod evidence;
pub mod lint;
pub mod policy;
pub mod report;
pub mod resolution;
pub mod result;
pub mod scanner;

pub use engine::AlertEvaluator;
pub use error::{EvalError, EvalResult};
pub use evidence::{documentation_container, label_indicates_assignment, resolve_evidence};
pub use lint::lint_account;
pub use policy::CompiledPolicy;
pub use report::AccountReport;
pub use resolution::{classify_resolution, Resolution};
pub use result::{EvaluationResult, EvaluationResultBuilder};
pub use scanner::scan_history;
