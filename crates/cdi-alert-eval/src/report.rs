//! Per-account catalog reports and change detection
//!
//! The host persists a report per account and reruns its workflow only
//! when a new pass differs from the stored one.

use crate::result::EvaluationResult;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Results of one catalog pass over an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountReport {
    pub account_id: String,
    pub evaluated_at: DateTime<Utc>,
    /// Results keyed by criteria group, in catalog order
    pub results: IndexMap<String, EvaluationResult>,
}

impl AccountReport {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self::at(account_id, Utc::now())
    }

    pub fn at(account_id: impl Into<String>, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            account_id: account_id.into(),
            evaluated_at,
            results: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, criteria_group: impl Into<String>, result: EvaluationResult) {
        self.results.insert(criteria_group.into(), result);
    }

    pub fn get(&self, criteria_group: &str) -> Option<&EvaluationResult> {
        self.results.get(criteria_group)
    }

    /// Whether this report differs from `previous`.
    ///
    /// True when there is no previous report, or when any group here is
    /// missing from it or has a different result. Groups present only in the
    /// previous report and the timestamps are ignored.
    pub fn changed_since(&self, previous: Option<&AccountReport>) -> bool {
        let Some(previous) = previous else {
            return true;
        };
        self.results
            .iter()
            .any(|(criteria_group, result)| previous.results.get(criteria_group) != Some(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn suppressed() -> EvaluationResult {
        EvaluationResult::builder().alert_triggered(true).trigger_alert(false).build()
    }

    fn report(results: &[(&str, EvaluationResult)]) -> AccountReport {
        let mut report = AccountReport::new("A1");
        for (name, result) in results {
            report.insert(*name, result.clone());
        }
        report
    }

    #[test]
    fn test_no_previous_is_changed() {
        assert!(report(&[]).changed_since(None));
    }

    #[test]
    fn test_identical_results_unchanged() {
        let previous =
            report(&[("Pneumonia", suppressed()), ("Sepsis", EvaluationResult::default())]);
        let mut current = previous.clone();
        current.evaluated_at = Utc.with_ymd_and_hms(2031, 1, 1, 0, 0, 0).unwrap();
        assert!(!current.changed_since(Some(&previous)));
    }

    #[test]
    fn test_different_result_is_changed() {
        let previous = report(&[("Pneumonia", EvaluationResult::default())]);
        let current = report(&[("Pneumonia", suppressed())]);
        assert!(current.changed_since(Some(&previous)));
    }

    #[test]
    fn test_new_group_is_changed() {
        let previous = report(&[("Pneumonia", EvaluationResult::default())]);
        let current = report(&[
            ("Pneumonia", EvaluationResult::default()),
            ("Stroke", EvaluationResult::default()),
        ]);
        assert!(current.changed_since(Some(&previous)));
    }

    #[test]
    fn test_dropped_group_ignored() {
        let previous =
            report(&[("Pneumonia", EvaluationResult::default()), ("Stroke", suppressed())]);
        let current = report(&[("Pneumonia", EvaluationResult::default())]);
        assert!(!current.changed_since(Some(&previous)));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let original = report(&[("Stroke", suppressed()), ("Anemia", EvaluationResult::default())]);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"accountId\":\"A1\""));

        let decoded: AccountReport = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
        let names: Vec<_> = decoded.results.keys().collect();
        assert_eq!(names, vec!["Stroke", "Anemia"]);
    }
}
