//! Alert History Scanner

use cdi_alert_model::MatchedCriteriaGroup;

/// Find the first alert record for `criteria_group`.
///
/// The name comparison is exact and case-sensitive. Scanning stops at the
/// first match, so when the host has recorded several alerts for the same
/// condition only the earliest one in sequence order counts. Records with no
/// criteria group never match.
pub fn scan_history<'a>(
    alerts: &'a [MatchedCriteriaGroup],
    criteria_group: &str,
) -> Option<&'a MatchedCriteriaGroup> {
    alerts.iter().find(|alert| alert.is_for(criteria_group))
}
