//! Evaluate command implementation

use super::{accounts, output};
use anyhow::{Context, Result};
use cdi_alert_diagnostics::{CdiError, CDI0401, CDI0404, CDI0406};
use cdi_alert_eval::{AccountReport, AlertEvaluator};
use cdi_alert_model::{CatalogEntry, Config, CriteriaCatalog};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::{fs, io};
use std::path::{Path, PathBuf};

/// Configuration for evaluate command
pub struct EvaluateConfig {
    pub accounts: Vec<PathBuf>,
    /// Restrict evaluation to these groups; groups missing from the catalog use the base policy
    pub criteria_groups: Vec<String>,
    /// Reports from an earlier run, for change detection
    pub previous: Option<PathBuf>,
    pub config: Config,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// One account's report, with its change status when a previous run was given
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedAccount {
    #[serde(flatten)]
    pub report: AccountReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
}

/// Evaluate accounts against the configured catalog
pub async fn evaluate(config: EvaluateConfig) -> Result<()> {
    let catalog = select_catalog(&config.config.catalog, &config.criteria_groups)?;
    let evaluator = AlertEvaluator::with_catalog(config.config.policy.clone(), &catalog)
        .map_err(CdiError::from)?;

    if config.verbose {
        eprintln!(
            "Evaluating criteria groups: {}",
            evaluator.criteria_groups().collect::<Vec<_>>().join(", ")
        );
    }

    let previous = match &config.previous {
        Some(path) => Some(load_previous(path)?),
        None => None,
    };

    let accounts = accounts::load_accounts(&config.accounts, config.verbose).await?;
    let evaluated: Vec<EvaluatedAccount> = accounts
        .iter()
        .map(|account| {
            let report = evaluator.evaluate_catalog(account);
            let changed = previous
                .as_ref()
                .map(|previous| report.changed_since(previous.get(&report.account_id)));
            EvaluatedAccount { report, changed }
        })
        .collect();

    let value = serde_json::to_value(&evaluated).context("Failed to serialize reports")?;
    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("pretty"));
    output::print_output(
        &value,
        &table_rows(&evaluated),
        format,
        config.output_file.as_deref(),
    )?;

    if config.verbose {
        let changed = evaluated.iter().filter(|e| e.changed == Some(true)).count();
        let suppressed = evaluated
            .iter()
            .flat_map(|e| e.report.results.values())
            .filter(|result| result.is_suppressed())
            .count();
        eprintln!(
            "{}",
            output::format_success(&format!(
                "Evaluated {} account(s), {} changed, {} suppressed alert(s)",
                evaluated.len(),
                changed,
                suppressed
            ))
        );
    }

    Ok(())
}

/// Catalog restricted to `names`. Names the catalog lacks are appended as plain entries.
fn select_catalog(
    catalog: &CriteriaCatalog,
    names: &[String],
) -> cdi_alert_diagnostics::Result<CriteriaCatalog> {
    if names.is_empty() {
        return Ok(catalog.clone());
    }

    let restricted = catalog.restrict_to(names);
    let mut entries: Vec<CatalogEntry> = restricted
        .iter()
        .map(|e| CatalogEntry {
            enabled: true,
            ..e.clone()
        })
        .collect();
    for name in names {
        if catalog.get(name).is_none() {
            entries.push(CatalogEntry::new(name.clone()));
        }
    }
    Ok(CriteriaCatalog::new(entries)?)
}

/// Read a previous evaluate output, keyed by account number
fn load_previous(path: &Path) -> cdi_alert_diagnostics::Result<HashMap<String, AccountReport>> {
    let context = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            CDI0404
        } else {
            CDI0401
        };
        CdiError::system(code, format!("Failed to read previous reports: {e}"))
            .with_context(context.clone())
    })?;
    let reports: Vec<AccountReport> = serde_json::from_str(&content).map_err(|e| {
        CdiError::system(CDI0406, format!("Failed to parse previous reports: {e}"))
            .with_context(context.clone())
    })?;
    Ok(reports.into_iter().map(|r| (r.account_id.clone(), r)).collect())
}

/// One row per account and criteria group
fn table_rows(evaluated: &[EvaluatedAccount]) -> Value {
    let rows: Vec<Value> = evaluated
        .iter()
        .flat_map(|e| {
            e.report.results.iter().map(move |(group, result)| {
                json!({
                    "account": e.report.account_id,
                    "criteriaGroup": group,
                    "alertTriggered": result.alert_triggered,
                    "triggerAlert": result.trigger_alert,
                    "assignedCode": result.assigned_code,
                    "outcome": result.outcome,
                    "reason": result.reason,
                    "changed": e.changed,
                })
            })
        })
        .collect();
    Value::Array(rows)
}
