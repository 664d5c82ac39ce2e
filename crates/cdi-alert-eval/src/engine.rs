//! Alert evaluator
//!
//! Runs scan, classify and resolve for one criteria group, or for every
//! enabled group in a catalog. Each evaluation is a pure read of the
//! account; the evaluator holds only compiled policies and is safe to share
//! across threads.

use crate::error::EvalResult;
use crate::evidence::resolve_evidence;
use crate::policy::CompiledPolicy;
use crate::report::AccountReport;
use crate::resolution::classify_resolution;
use crate::result::EvaluationResult;
use crate::scanner::scan_history;
use cdi_alert_model::{Account, CriteriaCatalog, ReconciliationPolicy};
use indexmap::IndexMap;

/// Reconciles accounts against their alert history
#[derive(Debug, Clone, Default)]
pub struct AlertEvaluator {
    base: CompiledPolicy,
    /// Enabled catalog groups, in catalog order, with their effective policies
    groups: IndexMap<String, CompiledPolicy>,
}

impl AlertEvaluator {
    /// Evaluator using the default policy and an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator using `policy` for every criteria group
    pub fn with_policy(policy: ReconciliationPolicy) -> EvalResult<Self> {
        Ok(Self {
            base: CompiledPolicy::new(policy)?,
            groups: IndexMap::new(),
        })
    }

    /// Evaluator for the enabled groups of `catalog`, each with its overrides applied to `policy`
    pub fn with_catalog(
        policy: ReconciliationPolicy,
        catalog: &CriteriaCatalog,
    ) -> EvalResult<Self> {
        let mut groups = IndexMap::new();
        for entry in catalog.enabled() {
            let compiled = CompiledPolicy::new(entry.effective_policy(&policy))?;
            groups.insert(entry.name.clone(), compiled);
        }
        log::debug!("Compiled policies for {} criteria group(s)", groups.len());

        Ok(Self {
            base: CompiledPolicy::new(policy)?,
            groups,
        })
    }

    /// Policy applied to `criteria_group`: its catalog policy, or the base policy
    pub fn policy_for(&self, criteria_group: &str) -> &CompiledPolicy {
        self.groups.get(criteria_group).unwrap_or(&self.base)
    }

    /// Criteria groups evaluated by `evaluate_catalog`, in order
    pub fn criteria_groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Reconcile one criteria group against the account's alert history
    pub fn evaluate(&self, account: &Account, criteria_group: &str) -> EvaluationResult {
        self.evaluate_with(account, criteria_group, self.policy_for(criteria_group))
    }

    /// Reconcile one criteria group with an explicit policy
    pub fn evaluate_with(
        &self,
        account: &Account,
        criteria_group: &str,
        policy: &CompiledPolicy,
    ) -> EvaluationResult {
        let matched = scan_history(account.alerts(), criteria_group);

        let result = EvaluationResult::builder()
            .resolution(classify_resolution(matched, policy.policy()))
            .assigned_code(resolve_evidence(matched, policy))
            .build();

        log::debug!(
            "Account {:?} / {}: matched={} trigger={} assigned={}",
            account.id,
            criteria_group,
            result.alert_triggered,
            result.trigger_alert,
            result.assigned_code
        );
        result
    }

    /// Reconcile every catalog group against the account
    pub fn evaluate_catalog(&self, account: &Account) -> AccountReport {
        let mut report = AccountReport::new(account.id.clone());
        for (criteria_group, policy) in &self.groups {
            let result = self.evaluate_with(account, criteria_group, policy);
            report.insert(criteria_group.clone(), result);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdi_alert_model::{CatalogEntry, Link, MatchedCriteriaGroup, PolicyOverrides};

    fn catalog() -> CriteriaCatalog {
        CriteriaCatalog::new(vec![
            CatalogEntry::new("Sepsis").with_policy(PolicyOverrides {
                autoresolved_reason: Some("Closed by rule".to_string()),
                ..Default::default()
            }),
            CatalogEntry::new("Anemia").disabled(),
            CatalogEntry::new("Pneumonia"),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_groups_in_order() {
        let evaluator =
            AlertEvaluator::with_catalog(ReconciliationPolicy::default(), &catalog()).unwrap();
        let groups: Vec<_> = evaluator.criteria_groups().collect();
        assert_eq!(groups, vec!["Sepsis", "Pneumonia"]);
    }

    #[test]
    fn test_group_overrides_apply() {
        let evaluator =
            AlertEvaluator::with_catalog(ReconciliationPolicy::default(), &catalog()).unwrap();
        let account = Account::new("A1")
            .with_alert(MatchedCriteriaGroup::new("Sepsis").with_reason("Closed by rule"))
            .with_alert(MatchedCriteriaGroup::new("Pneumonia").with_reason("Closed by rule"));

        assert!(!evaluator.evaluate(&account, "Sepsis").trigger_alert);
        assert!(evaluator.evaluate(&account, "Pneumonia").trigger_alert);
        // not in the catalog: base policy
        assert_eq!(evaluator.policy_for("Stroke").policy(), &ReconciliationPolicy::default());
    }

    #[test]
    fn test_evaluate_catalog() {
        let evaluator =
            AlertEvaluator::with_catalog(ReconciliationPolicy::default(), &catalog()).unwrap();
        let account = Account::new("A1").with_alert(
            MatchedCriteriaGroup::new("Pneumonia")
                .with_link(
                    Link::new("Documentation Includes").with_child(Link::new("Code Assigned")),
                ),
        );

        let report = evaluator.evaluate_catalog(&account);
        assert_eq!(report.account_id, "A1");
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results["Sepsis"], EvaluationResult::default());
        assert!(report.results["Pneumonia"].alert_triggered);
        assert!(report.results["Pneumonia"].assigned_code);
        assert!(!report.results.contains_key("Anemia"));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let catalog = CriteriaCatalog::new(vec![CatalogEntry::new("Sepsis").with_policy(
            PolicyOverrides {
                assignment_keyword: Some(String::new()),
                ..Default::default()
            },
        )])
        .unwrap();
        assert!(AlertEvaluator::with_catalog(ReconciliationPolicy::default(), &catalog).is_err());
    }

    #[test]
    fn test_evaluator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AlertEvaluator>();
    }
}
