//! Configuration resolution
//!
//! An explicit `--config` path or `CDI_ALERT_CONFIG` must exist. Without
//! either, `cdi-alert.toml` in the working directory is used when present,
//! and the built-in defaults otherwise.

use cdi_alert_diagnostics::{CdiError, Result};
use cdi_alert_model::Config;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CDI_ALERT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "cdi-alert.toml";

/// Resolve and load the configuration
pub fn load_config(explicit: Option<&Path>, verbose: bool) -> Result<Config> {
    let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let (path, required) = match (explicit, from_env) {
        (Some(path), _) => (path.to_path_buf(), true),
        (None, Some(path)) => (path, true),
        (None, None) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !path.exists() {
        if verbose {
            eprintln!("No {} found, using built-in configuration", path.display());
        }
        return Ok(Config::default());
    }

    let config = Config::open(&path)
        .map_err(|e| CdiError::from(e).with_context(path.display().to_string()))?;

    if verbose {
        eprintln!(
            "Loaded {} criteria group(s) from {}",
            config.catalog.len(),
            path.display()
        );
    }
    Ok(config)
}
