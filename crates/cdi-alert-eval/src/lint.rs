//! Data-quality lints for account alert history
//!
//! Evaluation never fails on incomplete data; it quietly treats missing
//! values as non-matching. These lints surface what was tolerated.

use crate::engine::AlertEvaluator;
use cdi_alert_diagnostics::{Diagnostic, CDI0101, CDI0102, CDI0103, CDI0104};
use cdi_alert_model::{Account, Link};
use std::collections::HashMap;

/// Report incomplete or ambiguous alert records on `account`.
///
/// Each record is checked against the policy `evaluator` applies to its
/// criteria group.
pub fn lint_account(account: &Account, evaluator: &AlertEvaluator) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, alert) in account.alerts().iter().enumerate() {
        let subject = format!("MatchedCriteriaGroups[{index}]");

        match alert.criteria_group.as_deref() {
            None => diagnostics.push(
                Diagnostic::warning(CDI0101, "Alert record has no criteria group")
                    .with_subject(subject.clone()),
            ),
            Some(name) => {
                if let Some(first) = first_seen.get(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            CDI0102,
                            format!(
                                "Duplicate record for '{name}' is ignored; \
                                 record {first} takes precedence"
                            ),
                        )
                        .with_subject(subject.clone()),
                    );
                } else {
                    first_seen.insert(name, index);
                }
            }
        }

        if let Some(name) = alert.criteria_group.as_deref() {
            let label = &evaluator.policy_for(name).policy().documentation_label;
            let containers = alert
                .links
                .iter()
                .filter(|link| link.text() == Some(label.as_str()))
                .count();
            if containers > 1 {
                diagnostics.push(
                    Diagnostic::warning(
                        CDI0104,
                        format!("{containers} '{label}' links; only the first is inspected"),
                    )
                    .with_subject(subject.clone()),
                );
            }
        }

        for (link_index, link) in alert.links.iter().enumerate() {
            lint_link(link, &format!("{subject}.Links[{link_index}]"), &mut diagnostics);
        }
    }

    diagnostics
}

fn lint_link(link: &Link, subject: &str, diagnostics: &mut Vec<Diagnostic>) {
    if link.text().is_none() {
        diagnostics.push(Diagnostic::warning(CDI0103, "Link has no text").with_subject(subject));
    }
    for (index, child) in link.links.iter().enumerate() {
        lint_link(child, &format!("{subject}.Links[{index}]"), diagnostics);
    }
}
