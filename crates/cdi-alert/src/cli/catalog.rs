//! Catalog command implementation

use super::output;
use anyhow::{Context, Result};
use cdi_alert_model::Config;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Configuration for catalog command
pub struct CatalogConfig {
    pub config: Config,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// List configured criteria groups with their effective policies
pub async fn catalog(config: CatalogConfig) -> Result<()> {
    let rows = catalog_rows(&config.config);
    let format = output::OutputFormat::parse(config.output_format.as_deref().unwrap_or("table"));
    output::print_output(&rows, &rows, format, config.output_file.as_deref())
        .context("Failed to print catalog")
}

fn catalog_rows(config: &Config) -> Value {
    let rows: Vec<Value> = config
        .catalog
        .iter()
        .map(|entry| {
            let policy = entry.effective_policy(&config.policy);
            json!({
                "criteriaGroup": entry.name,
                "enabled": entry.enabled,
                "overridden": !entry.policy.is_empty(),
                "autoresolvedOutcome": policy.autoresolved_outcome,
                "autoresolvedReason": policy.autoresolved_reason,
                "documentationLabel": policy.documentation_label,
                "assignmentKeyword": policy.assignment_keyword,
            })
        })
        .collect();
    Value::Array(rows)
}
