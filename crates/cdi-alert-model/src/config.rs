//! TOML configuration
//!
//! ```toml
//! [policy]
//! autoresolved_reason = "Previously Autoresolved"
//!
//! [[criteria_groups]]
//! name = "Pneumonia"
//!
//! [[criteria_groups]]
//! name = "Sepsis"
//! [criteria_groups.policy]
//! documentation_label = "Documentation Includes"
//! ```

use crate::catalog::CriteriaCatalog;
use crate::policy::{is_word_bounded, ReconciliationPolicy};
use cdi_alert_diagnostics::{CdiError, CDI0001, CDI0004, CDI0005, CDI0401, CDI0404};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("Policy field '{field}' is empty{}", scope_suffix(.criteria_group))]
    EmptyPolicyValue {
        field: &'static str,
        criteria_group: Option<String>,
    },

    #[error(
        "Assignment keyword '{keyword}' must start and end with a letter, digit or underscore{}",
        scope_suffix(.criteria_group)
    )]
    UnboundedKeyword {
        keyword: String,
        criteria_group: Option<String>,
    },
}

fn scope_suffix(criteria_group: &Option<String>) -> String {
    criteria_group
        .as_ref()
        .map(|name| format!(" for criteria group '{name}'"))
        .unwrap_or_default()
}

impl From<ConfigError> for CdiError {
    fn from(err: ConfigError) -> Self {
        let code = match err {
            ConfigError::Io(ref e) if e.kind() == io::ErrorKind::NotFound => CDI0404,
            ConfigError::Io(_) => CDI0401,
            ConfigError::Toml(_) => CDI0001,
            ConfigError::EmptyPolicyValue { .. } => CDI0004,
            ConfigError::UnboundedKeyword { .. } => CDI0005,
        };
        CdiError::config(code, err.to_string())
    }
}

/// Reconciliation configuration: a base policy plus the criteria-group catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub policy: ReconciliationPolicy,
    #[serde(rename = "criteria_groups", default)]
    pub catalog: CriteriaCatalog,
}

impl Config {
    /// Read, parse and validate a config file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        log::debug!("Configuration lists {} criteria group(s)", config.catalog.len());
        Ok(config)
    }

    /// Check the base policy and every effective group policy.
    ///
    /// Policy strings must be non-blank and the assignment keyword must be
    /// usable as a whole word.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_policy(&self.policy, None)?;
        for entry in self.catalog.iter() {
            validate_policy(&entry.effective_policy(&self.policy), Some(&entry.name))?;
        }
        Ok(())
    }
}

fn validate_policy(
    policy: &ReconciliationPolicy,
    criteria_group: Option<&String>,
) -> Result<(), ConfigError> {
    if let Some(field) = policy.empty_fields().into_iter().next() {
        return Err(ConfigError::EmptyPolicyValue {
            field,
            criteria_group: criteria_group.cloned(),
        });
    }
    if !is_word_bounded(&policy.assignment_keyword) {
        return Err(ConfigError::UnboundedKeyword {
            keyword: policy.assignment_keyword.clone(),
            criteria_group: criteria_group.cloned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog.len(), 1);
        assert!(config.catalog.get("Pneumonia").is_some());
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_toml_str(
            r#"
            [policy]
            autoresolved_outcome = "AUTO_CLOSED"

            [[criteria_groups]]
            name = "Pneumonia"

            [[criteria_groups]]
            name = "Sepsis"
            enabled = false

            [[criteria_groups]]
            name = "Stroke"
            [criteria_groups.policy]
            assignment_keyword = "Coded"
            "#,
        )
        .unwrap();

        assert_eq!(config.policy.autoresolved_outcome, "AUTO_CLOSED");
        assert_eq!(config.policy.autoresolved_reason, "Previously Autoresolved");
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.catalog.enabled().count(), 2);

        let stroke = config.catalog.get("Stroke").unwrap().effective_policy(&config.policy);
        assert_eq!(stroke.assignment_keyword, "Coded");
        assert_eq!(stroke.autoresolved_outcome, "AUTO_CLOSED");
    }

    #[test]
    fn test_duplicate_group_fails_to_parse() {
        let err = Config::from_toml_str(
            r#"
            [[criteria_groups]]
            name = "Sepsis"
            [[criteria_groups]]
            name = "Sepsis"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::Toml(_)));
        let duplicate = CatalogError::Duplicate("Sepsis".to_string()).to_string();
        assert!(err.to_string().contains(&duplicate));
    }

    #[test]
    fn test_empty_override_rejected() {
        let err = Config::from_toml_str(
            r#"
            [[criteria_groups]]
            name = "Sepsis"
            [criteria_groups.policy]
            documentation_label = ""
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Policy field 'documentation_label' is empty for criteria group 'Sepsis'"
        );
        assert_eq!(CdiError::from(err).code(), CDI0004);
    }

    #[test]
    fn test_unbounded_keyword_rejected() {
        let err = Config::from_toml_str(
            r#"
            [[criteria_groups]]
            name = "Stroke"
            [criteria_groups.policy]
            assignment_keyword = "Dx."
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            &err,
            ConfigError::UnboundedKeyword { keyword, criteria_group: Some(group) }
                if keyword == "Dx." && group == "Stroke"
        ));
        assert_eq!(CdiError::from(err).code(), CDI0005);

        let base = Config::from_toml_str("[policy]
assignment_keyword = \"(Assigned)\"\n");
        assert!(matches!(base, Err(ConfigError::UnboundedKeyword { criteria_group: None, .. })));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("[policy]\nkeyword = \"x\"\n").is_err());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[criteria_groups]]\nname = \"Anemia\"").unwrap();

        let config = Config::open(file.path()).unwrap();
        assert!(config.catalog.get("Anemia").is_some());

        let missing = Config::open(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
        assert_eq!(CdiError::from(missing).code(), CDI0404);
    }
}
