//! cdi-alert command-line interface

use anyhow::Result;
use cdi_alert::cli::{catalog, evaluate, lint, output, settings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CDI alert reconciliation tool
#[derive(Parser)]
#[command(name = "cdi-alert")]
#[command(
    author,
    version,
    about = "Reconcile CDI condition alerts against account alert history",
    long_about = None
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (default: $CDI_ALERT_CONFIG, then ./cdi-alert.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate accounts against the criteria-group catalog
    Evaluate {
        /// Account JSON files or directories of them
        accounts: Vec<PathBuf>,

        /// Only evaluate these criteria groups
        #[arg(short = 'g', long = "criteria-group")]
        criteria_groups: Vec<String>,

        /// Reports from an earlier run; marks each account changed or unchanged
        #[arg(short, long)]
        previous: Option<PathBuf>,
    },

    /// Report incomplete or ambiguous alert history
    Lint {
        /// Account JSON files or directories of them
        accounts: Vec<PathBuf>,

        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,
    },

    /// List configured criteria groups and their policies
    Catalog,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(default_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = settings::load_config(cli.config.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Evaluate {
            accounts,
            criteria_groups,
            previous,
        } => {
            evaluate::evaluate(evaluate::EvaluateConfig {
                accounts,
                criteria_groups,
                previous,
                config,
                verbose: cli.verbose,
                output_format: cli.format,
                output_file: cli.output,
            })
            .await
        }

        Commands::Lint { accounts, strict } => {
            lint::lint(lint::LintConfig {
                accounts,
                strict,
                config,
                verbose: cli.verbose,
            })
            .await
        }

        Commands::Catalog => {
            catalog::catalog(catalog::CatalogConfig {
                config,
                output_format: cli.format,
                output_file: cli.output,
            })
            .await
        }
    }
}

#[tokio::main]
async fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
