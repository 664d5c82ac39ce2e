//! Evidence Link Resolver
//!
//! Coding evidence lives two levels deep: a top-level link labelled
//! "Documentation Includes" whose children name what was documented. A child
//! label containing the whole word "Assigned" means a code has been assigned.

use crate::policy::{default_label_indicates_assignment, CompiledPolicy};
use cdi_alert_model::{Link, MatchedCriteriaGroup};

/// True if `text` contains "Assigned" as a whole word, ignoring case.
///
/// "Code Assigned by HIM" matches. "Reassigned to coder" and
/// "Unassigned pending" do not, because the keyword is embedded in a longer
/// word.
pub fn label_indicates_assignment(text: &str) -> bool {
    default_label_indicates_assignment(text)
}

/// First top-level link whose label equals `label` exactly
pub fn documentation_container<'a>(
    record: &'a MatchedCriteriaGroup,
    label: &str,
) -> Option<&'a Link> {
    record.links.iter().find(|link| link.text() == Some(label))
}

/// Whether the matched record already links assigned-code evidence.
///
/// Only the first documentation container is inspected, and only its direct
/// children. Links without a label are skipped.
pub fn resolve_evidence(record: Option<&MatchedCriteriaGroup>, policy: &CompiledPolicy) -> bool {
    let Some(record) = record else {
        return false;
    };
    let label = &policy.policy().documentation_label;
    let Some(container) = documentation_container(record, label) else {
        return false;
    };

    container.links.iter().filter_map(Link::text).any(|text| {
        let assigned = policy.label_indicates_assignment(text);
        log::trace!("Documentation link {text:?} assigned={assigned}");
        assigned
    })
}
