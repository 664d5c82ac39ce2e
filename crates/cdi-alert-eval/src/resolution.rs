//! Resolution Classifier

use cdi_alert_model::{MatchedCriteriaGroup, ReconciliationPolicy};

/// Prior-state flags derived from the matched alert record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// A record for the criteria group exists
    pub alert_triggered: bool,
    /// False when the record was closed by the system
    pub trigger_alert: bool,
    pub validated: Option<bool>,
    pub outcome: Option<String>,
    pub subtitle: Option<String>,
    pub reason: Option<String>,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            alert_triggered: false,
            trigger_alert: true,
            validated: None,
            outcome: None,
            subtitle: None,
            reason: None,
        }
    }
}

/// Decide whether the matched record suppresses re-triggering.
///
/// With no record the defaults stand and the alert may trigger. A record
/// whose outcome is the autoresolved outcome, or whose reason is the
/// autoresolved reason, suppresses it. Either one is enough. Unset fields
/// never match.
pub fn classify_resolution(
    record: Option<&MatchedCriteriaGroup>,
    policy: &ReconciliationPolicy,
) -> Resolution {
    let Some(record) = record else {
        return Resolution::default();
    };

    let autoresolved = record.outcome.as_deref() == Some(policy.autoresolved_outcome.as_str())
        || record.reason.as_deref() == Some(policy.autoresolved_reason.as_str());

    Resolution {
        alert_triggered: true,
        trigger_alert: !autoresolved,
        validated: record.is_validated,
        outcome: record.outcome.clone(),
        subtitle: record.subtitle.clone(),
        reason: record.reason.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(record: &MatchedCriteriaGroup) -> Resolution {
        classify_resolution(Some(record), &ReconciliationPolicy::default())
    }

    #[test]
    fn test_no_record() {
        let resolution = classify_resolution(None, &ReconciliationPolicy::default());
        assert_eq!(resolution, Resolution::default());
        assert!(resolution.trigger_alert);
        assert!(!resolution.alert_triggered);
    }

    #[test]
    fn test_open_record_passes_fields_through() {
        let record = MatchedCriteriaGroup::new("Pneumonia")
            .with_validated(false)
            .with_outcome("OPEN")
            .with_reason("")
            .with_subtitle("Possible Pneumonia");

        let resolution = classify(&record);
        assert!(resolution.alert_triggered);
        assert!(resolution.trigger_alert);
        assert_eq!(resolution.validated, Some(false));
        assert_eq!(resolution.outcome.as_deref(), Some("OPEN"));
        assert_eq!(resolution.reason.as_deref(), Some(""));
        assert_eq!(resolution.subtitle.as_deref(), Some("Possible Pneumonia"));
    }

    #[test]
    fn test_outcome_or_reason_suppresses() {
        let by_outcome = MatchedCriteriaGroup::new("Pneumonia").with_outcome("AUTORESOLVED");
        let by_reason = MatchedCriteriaGroup::new("Pneumonia")
            .with_outcome("OPEN")
            .with_reason("Previously Autoresolved");
        let by_both = by_reason.clone().with_outcome("AUTORESOLVED");

        assert!(!classify(&by_outcome).trigger_alert);
        assert!(!classify(&by_reason).trigger_alert);
        assert!(!classify(&by_both).trigger_alert);
    }

    #[test]
    fn test_unset_fields_never_suppress() {
        let record = MatchedCriteriaGroup::new("Pneumonia");
        let resolution = classify(&record);
        assert!(resolution.alert_triggered);
        assert!(resolution.trigger_alert);
        assert_eq!(resolution.validated, None);
    }

    #[test]
    fn test_comparison_is_exact() {
        let record = MatchedCriteriaGroup::new("Pneumonia")
            .with_outcome("autoresolved")
            .with_reason("previously autoresolved");
        assert!(classify(&record).trigger_alert);
    }

    #[test]
    fn test_policy_override() {
        let policy = ReconciliationPolicy {
            autoresolved_outcome: "CLOSED_BY_RULE".to_string(),
            ..Default::default()
        };
        let closed = MatchedCriteriaGroup::new("Sepsis").with_outcome("CLOSED_BY_RULE");
        let legacy = MatchedCriteriaGroup::new("Sepsis").with_outcome("AUTORESOLVED");

        assert!(!classify_resolution(Some(&closed), &policy).trigger_alert);
        assert!(classify_resolution(Some(&legacy), &policy).trigger_alert);
    }
}
