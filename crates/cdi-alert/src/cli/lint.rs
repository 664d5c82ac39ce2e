//! Lint command implementation

use super::{accounts, output};
use anyhow::Result;
use cdi_alert_diagnostics::{CdiError, Diagnostic, Severity};
use cdi_alert_eval::{lint_account, AlertEvaluator};
use cdi_alert_model::Config;
use colored::Colorize;
use std::path::PathBuf;

/// Configuration for lint command
pub struct LintConfig {
    pub accounts: Vec<PathBuf>,
    /// Strict mode (warnings as errors)
    pub strict: bool,
    pub config: Config,
    pub verbose: bool,
}

/// Lint findings for one account
pub struct AccountFindings {
    pub account_id: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Report data-quality findings for accounts
pub async fn lint(config: LintConfig) -> Result<()> {
    let evaluator =
        AlertEvaluator::with_catalog(config.config.policy.clone(), &config.config.catalog)
            .map_err(CdiError::from)?;
    let accounts = accounts::load_accounts(&config.accounts, config.verbose).await?;

    let findings: Vec<AccountFindings> = accounts
        .iter()
        .map(|account| AccountFindings {
            account_id: account.id.clone(),
            diagnostics: lint_account(account, &evaluator),
        })
        .collect();

    for finding in &findings {
        print_findings(finding, config.verbose);
    }

    let total_warnings: usize = findings
        .iter()
        .flat_map(|f| &f.diagnostics)
        .filter(|d| d.severity == Severity::Warning)
        .count();

    println!();
    if total_warnings == 0 {
        println!(
            "{}",
            output::format_success(&format!("All {} account(s) are clean", findings.len()))
        );
        return Ok(());
    }

    eprintln!(
        "{}",
        output::format_warning(&format!(
            "{} warning(s) across {} account(s)",
            total_warnings,
            findings.iter().filter(|f| !f.diagnostics.is_empty()).count()
        ))
    );

    if config.strict {
        anyhow::bail!("Strict mode: treating {} warning(s) as errors", total_warnings);
    }
    Ok(())
}

fn print_findings(finding: &AccountFindings, verbose: bool) {
    if finding.diagnostics.is_empty() {
        if verbose {
            println!("{} {}", "✓".green(), finding.account_id);
        }
        return;
    }

    println!("{} {}", "✗".yellow(), finding.account_id.bold());
    for diagnostic in &finding.diagnostics {
        for line in diagnostic.render_colored().lines() {
            println!("  {}", line);
        }
    }
}
