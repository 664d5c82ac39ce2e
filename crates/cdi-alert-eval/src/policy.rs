//! Compiled reconciliation policy

use crate::error::{EvalError, EvalResult};
use cdi_alert_model::{is_word_bounded, ReconciliationPolicy, ASSIGNMENT_KEYWORD};
use regex::Regex;
use std::sync::LazyLock;

static DEFAULT_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    assignment_pattern(ASSIGNMENT_KEYWORD)
        .expect("default assignment keyword is a valid pattern")
});

/// Case-insensitive whole-word pattern for `keyword`
fn assignment_pattern(keyword: &str) -> EvalResult<Regex> {
    if keyword.trim().is_empty() {
        return Err(EvalError::EmptyKeyword);
    }
    if !is_word_bounded(keyword) {
        return Err(EvalError::UnboundedKeyword(keyword.to_string()));
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).map_err(|e| {
        EvalError::InvalidKeyword {
            keyword: keyword.to_string(),
            message: e.to_string(),
        }
    })
}

/// A reconciliation policy with its assignment keyword compiled
#[derive(Debug, Clone)]
pub struct CompiledPolicy {
    policy: ReconciliationPolicy,
    assignment: Regex,
}

impl CompiledPolicy {
    pub fn new(policy: ReconciliationPolicy) -> EvalResult<Self> {
        let assignment = assignment_pattern(&policy.assignment_keyword)?;
        Ok(Self { policy, assignment })
    }

    pub fn policy(&self) -> &ReconciliationPolicy {
        &self.policy
    }

    /// True if `text` contains the assignment keyword as a whole word
    pub fn label_indicates_assignment(&self, text: &str) -> bool {
        self.assignment.is_match(text)
    }
}

impl Default for CompiledPolicy {
    fn default() -> Self {
        Self {
            policy: ReconciliationPolicy::default(),
            assignment: DEFAULT_ASSIGNMENT.clone(),
        }
    }
}

/// Whole-word, case-insensitive test for the default keyword "Assigned"
pub(crate) fn default_label_indicates_assignment(text: &str) -> bool {
    DEFAULT_ASSIGNMENT.is_match(text)
}
