//! Reconciliation policy literals
//!
//! The defaults are the values the Pneumonia condition script uses. Other
//! criteria groups may override any of them through the catalog.

use serde::{Deserialize, Serialize};

pub const AUTORESOLVED_OUTCOME: &str = "AUTORESOLVED";
pub const AUTORESOLVED_REASON: &str = "Previously Autoresolved";
pub const DOCUMENTATION_LABEL: &str = "Documentation Includes";
pub const ASSIGNMENT_KEYWORD: &str = "Assigned";

/// True if `keyword` starts and ends with a word character.
///
/// Whole-word matching anchors on word boundaries, which only exist next to
/// word characters. A keyword like `Dx.` could never match inside a label.
pub fn is_word_bounded(keyword: &str) -> bool {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    match (keyword.chars().next(), keyword.chars().next_back()) {
        (Some(first), Some(last)) => is_word(first) && is_word(last),
        _ => false,
    }
}

/// Literals that drive suppression and evidence detection for one criteria group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReconciliationPolicy {
    /// Outcome code that marks an alert as closed by the system
    pub autoresolved_outcome: String,
    /// Reason text that marks an alert as closed by the system
    pub autoresolved_reason: String,
    /// Label of the top-level link whose children carry coding evidence
    pub documentation_label: String,
    /// Whole word that, in a child label, means a code was assigned
    pub assignment_keyword: String,
}

impl Default for ReconciliationPolicy {
    fn default() -> Self {
        Self {
            autoresolved_outcome: AUTORESOLVED_OUTCOME.to_string(),
            autoresolved_reason: AUTORESOLVED_REASON.to_string(),
            documentation_label: DOCUMENTATION_LABEL.to_string(),
            assignment_keyword: ASSIGNMENT_KEYWORD.to_string(),
        }
    }
}

impl ReconciliationPolicy {
    /// Return a copy with every set override applied
    pub fn with_overrides(&self, overrides: &PolicyOverrides) -> Self {
        let pick =
            |over: &Option<String>, base: &String| over.clone().unwrap_or_else(|| base.clone());
        Self {
            autoresolved_outcome: pick(
                &overrides.autoresolved_outcome,
                &self.autoresolved_outcome,
            ),
            autoresolved_reason: pick(&overrides.autoresolved_reason, &self.autoresolved_reason),
            documentation_label: pick(&overrides.documentation_label, &self.documentation_label),
            assignment_keyword: pick(&overrides.assignment_keyword, &self.assignment_keyword),
        }
    }

    /// Names of fields holding an empty string
    pub fn empty_fields(&self) -> Vec<&'static str> {
        [
            ("autoresolved_outcome", &self.autoresolved_outcome),
            ("autoresolved_reason", &self.autoresolved_reason),
            ("documentation_label", &self.documentation_label),
            ("assignment_keyword", &self.assignment_keyword),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Partial policy set on a single catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoresolved_outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoresolved_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_keyword: Option<String>,
}

impl PolicyOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
