//! Evaluation Result assembly

use crate::resolution::Resolution;
use serde::{Deserialize, Serialize};

/// Outcome of reconciling one criteria group against an account's alert history.
///
/// Defaults: `alert_triggered = false`, `trigger_alert = true`,
/// `assigned_code = false`, passthrough fields unset. These describe an
/// account with no prior alert for the condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// A prior alert for the criteria group exists
    pub alert_triggered: bool,
    /// The alert may be raised or kept open
    pub trigger_alert: bool,
    /// Coding evidence is already linked to the prior alert
    pub assigned_code: bool,
    #[serde(default)]
    pub validated: Option<bool>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        EvaluationResultBuilder::new().build()
    }
}

impl EvaluationResult {
    pub fn builder() -> EvaluationResultBuilder {
        EvaluationResultBuilder::new()
    }

    /// True if a prior alert exists and was closed by the system
    pub fn is_suppressed(&self) -> bool {
        !self.trigger_alert
    }
}

/// Builder for `EvaluationResult`, starting from the documented defaults
#[derive(Debug, Clone)]
pub struct EvaluationResultBuilder {
    result: EvaluationResult,
}

impl Default for EvaluationResultBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationResultBuilder {
    pub fn new() -> Self {
        Self {
            result: EvaluationResult {
                alert_triggered: false,
                trigger_alert: true,
                assigned_code: false,
                validated: None,
                outcome: None,
                subtitle: None,
                reason: None,
            },
        }
    }

    /// Apply the classifier's flags and passthrough fields
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.result.alert_triggered = resolution.alert_triggered;
        self.result.trigger_alert = resolution.trigger_alert;
        self.result.validated = resolution.validated;
        self.result.outcome = resolution.outcome;
        self.result.subtitle = resolution.subtitle;
        self.result.reason = resolution.reason;
        self
    }

    pub fn assigned_code(mut self, assigned: bool) -> Self {
        self.result.assigned_code = assigned;
        self
    }

    pub fn alert_triggered(mut self, triggered: bool) -> Self {
        self.result.alert_triggered = triggered;
        self
    }

    pub fn trigger_alert(mut self, trigger: bool) -> Self {
        self.result.trigger_alert = trigger;
        self
    }

    pub fn build(self) -> EvaluationResult {
        self.result
    }
}
