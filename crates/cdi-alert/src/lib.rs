//! CDI alert reconciliation
//!
//! Condition evaluation scripts consult an account's alert history before
//! raising an alert. This crate bundles:
//! - The account and alert-history model, catalog and configuration
//! - The reconciliation evaluator (prior alert, autoresolve suppression,
//!   assigned-code evidence)
//! - Data-quality diagnostics
//!
//! # Example
//!
//! ```
//! use cdi_alert::{Account, AlertEvaluator, Config, Link, MatchedCriteriaGroup};
//!
//! let config = Config::default();
//! let evaluator = AlertEvaluator::with_catalog(config.policy.clone(), &config.catalog)?;
//!
//! let account = Account::new("A1001").with_alert(
//!     MatchedCriteriaGroup::new("Pneumonia")
//!         .with_link(
//!             Link::new("Documentation Includes").with_child(Link::new("Code Assigned by HIM")),
//!         ),
//! );
//!
//! let report = evaluator.evaluate_catalog(&account);
//! assert!(report.results["Pneumonia"].assigned_code);
//! # Ok::<(), cdi_alert::eval::EvalError>(())
//! ```

pub use cdi_alert_diagnostics as diagnostics;
pub use cdi_alert_eval as eval;
pub use cdi_alert_model as model;

// Convenience re-exports
pub use cdi_alert_diagnostics::{CdiError, Diagnostic, Result};
pub use cdi_alert_eval::{AccountReport, AlertEvaluator, EvaluationResult};
pub use cdi_alert_model::{
    Account, Config, CriteriaCatalog, Link, MatchedCriteriaGroup, ReconciliationPolicy,
};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
