//! Account and alert-history types
//!
//! These mirror the documents the host platform stores for each patient
//! encounter. Field names follow the host's PascalCase JSON. Everything
//! except the criteria group name is optional, since the host may hand us
//! partially populated records.
//!
//! Decoding is lenient: a field holding the wrong JSON type reads as unset
//! and a malformed element of a record or link list is dropped.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, VecSkipError};

/// A patient encounter under evaluation
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// Account number
    #[serde(rename = "_id", alias = "Id", default)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub id: String,
    /// Previously raised alerts, in the order the host recorded them
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError<Option<VecSkipError<_>>>")]
    pub matched_criteria_groups: Option<Vec<MatchedCriteriaGroup>>,
}

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            matched_criteria_groups: None,
        }
    }

    /// Append an alert record, creating the collection if it is unset
    pub fn with_alert(mut self, alert: MatchedCriteriaGroup) -> Self {
        self.matched_criteria_groups.get_or_insert_with(Vec::new).push(alert);
        self
    }

    /// Alert history in recorded order. An unset collection reads as empty.
    pub fn alerts(&self) -> &[MatchedCriteriaGroup] {
        self.matched_criteria_groups.as_deref().unwrap_or_default()
    }
}

/// One previously raised alert for a named condition
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchedCriteriaGroup {
    /// Condition name, e.g. "Pneumonia"
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub criteria_group: Option<String>,
    /// Whether the alert has been validated by a user
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub is_validated: Option<bool>,
    /// Outcome code, e.g. "AUTORESOLVED"
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub outcome: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub reason: Option<String>,
    #[serde(default, alias = "SubTitle")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub subtitle: Option<String>,
    /// Documentation links attached to the alert
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub links: Vec<Link>,
}

impl MatchedCriteriaGroup {
    pub fn new(criteria_group: impl Into<String>) -> Self {
        Self {
            criteria_group: Some(criteria_group.into()),
            ..Self::default()
        }
    }

    pub fn with_validated(mut self, validated: bool) -> Self {
        self.is_validated = Some(validated);
        self
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// True if this record belongs to `criteria_group` (exact, case-sensitive)
    pub fn is_for(&self, criteria_group: &str) -> bool {
        self.criteria_group.as_deref() == Some(criteria_group)
    }
}

/// A documentation cross-reference attached to an alert
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    /// The text to display for the link
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub link_text: Option<String>,
    /// Sub-links
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnError<VecSkipError<_>>")]
    pub links: Vec<Link>,
}

impl Link {
    pub fn new(link_text: impl Into<String>) -> Self {
        Self {
            link_text: Some(link_text.into()),
            links: Vec::new(),
        }
    }

    /// A link whose label is missing
    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn with_child(mut self, child: Link) -> Self {
        self.links.push(child);
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.link_text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_host_document() {
        let json = r#"{
            "_id": "A1001",
            "PatientType": "Inpatient",
            "MatchedCriteriaGroups": [
                {
                    "CriteriaGroup": "Pneumonia",
                    "IsValidated": true,
                    "Outcome": "OPEN",
                    "Reason": "",
                    "SubTitle": "Possible Pneumonia",
                    "Links": [
                        {
                            "LinkText": "Documentation Includes",
                            "Links": [{ "LinkText": "Code Assigned by HIM", "Links": null }]
                        }
                    ]
                }
            ]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        let expected = Account::new("A1001").with_alert(
            MatchedCriteriaGroup::new("Pneumonia")
                .with_validated(true)
                .with_outcome("OPEN")
                .with_reason("")
                .with_subtitle("Possible Pneumonia")
                .with_link(
                    Link::new("Documentation Includes")
                        .with_child(Link::new("Code Assigned by HIM")),
                ),
        );
        assert_eq!(account, expected);
    }

    #[test]
    fn test_missing_and_null_collections() {
        let absent: Account = serde_json::from_str(r#"{ "_id": "A1" }"#).unwrap();
        assert!(absent.matched_criteria_groups.is_none());
        assert!(absent.alerts().is_empty());

        let null: Account =
            serde_json::from_str(r#"{ "Id": "A2", "MatchedCriteriaGroups": null }"#).unwrap();
        assert_eq!(null.id, "A2");
        assert!(null.alerts().is_empty());

        let record: MatchedCriteriaGroup = serde_json::from_str(r#"{ "Links": null }"#).unwrap();
        assert!(record.criteria_group.is_none());
        assert!(record.links.is_empty());
    }

    #[test]
    fn test_wrongly_typed_fields_read_as_unset() {
        let json = r#"{
            "_id": "A3",
            "MatchedCriteriaGroups": [
                42,
                {
                    "CriteriaGroup": "Pneumonia",
                    "IsValidated": "yes",
                    "Outcome": ["AUTORESOLVED"],
                    "Reason": "Previously Autoresolved",
                    "Links": [
                        { "LinkText": 17, "Links": {} },
                        "Documentation Includes",
                        {
                            "LinkText": "Documentation Includes",
                            "Links": [{ "LinkText": "Code Assigned" }]
                        }
                    ]
                },
                { "CriteriaGroup": 7, "Links": {} }
            ]
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        let expected = Account::new("A3")
            .with_alert(
                MatchedCriteriaGroup::new("Pneumonia")
                    .with_reason("Previously Autoresolved")
                    .with_link(Link::untitled())
                    .with_link(
                        Link::new("Documentation Includes").with_child(Link::new("Code Assigned")),
                    ),
            )
            .with_alert(MatchedCriteriaGroup::default());
        assert_eq!(account, expected);
    }

    #[test]
    fn test_wrongly_typed_collection_reads_as_empty() {
        let account: Account =
            serde_json::from_str(r#"{ "_id": 1001, "MatchedCriteriaGroups": "none" }"#).unwrap();
        assert_eq!(account.id, "");
        assert!(account.matched_criteria_groups.is_none());
        assert!(account.alerts().is_empty());
    }

    #[test]
    fn test_link_without_text() {
        let link: Link = serde_json::from_str(r#"{ "Links": [] }"#).unwrap();
        assert_eq!(link, Link::untitled());
        assert_eq!(link.text(), None);
    }

    #[test]
    fn test_is_for_is_case_sensitive() {
        let record = MatchedCriteriaGroup::new("Pneumonia");
        assert!(record.is_for("Pneumonia"));
        assert!(!record.is_for("pneumonia"));
        assert!(!MatchedCriteriaGroup::default().is_for(""));
    }
}
