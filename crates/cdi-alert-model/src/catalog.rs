//! Criteria-group catalog
//!
//! The ordered list of conditions the host evaluates for every account.
//! Order is significant: reports list results in catalog order.

use crate::policy::{PolicyOverrides, ReconciliationPolicy};
use cdi_alert_diagnostics::{CdiError, CDI0002, CDI0003};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One condition in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// Criteria group name, matched exactly against alert records
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "PolicyOverrides::is_empty")]
    pub policy: PolicyOverrides,
}

fn enabled_by_default() -> bool {
    true
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            policy: PolicyOverrides::default(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn with_policy(mut self, policy: PolicyOverrides) -> Self {
        self.policy = policy;
        self
    }

    /// The base policy with this entry's overrides applied
    pub fn effective_policy(&self, base: &ReconciliationPolicy) -> ReconciliationPolicy {
        base.with_overrides(&self.policy)
    }
}

/// Catalog validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Criteria group at position {0} has an empty name")]
    EmptyName(usize),

    #[error("Criteria group '{0}' is listed more than once")]
    Duplicate(String),
}

impl From<CatalogError> for CdiError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::EmptyName(_) => CDI0002,
            CatalogError::Duplicate(_) => CDI0003,
        };
        CdiError::config(code, err.to_string())
    }
}

/// Validated, ordered set of criteria groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct CriteriaCatalog {
    entries: Vec<CatalogEntry>,
}

impl CriteriaCatalog {
    /// Build a catalog, rejecting empty and duplicate names
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (position, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(position));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::Duplicate(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Catalog with a single enabled group and no overrides
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            entries: vec![CatalogEntry::new(name)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Entries that take part in evaluation
    pub fn enabled(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Keep only the named groups, preserving catalog order
    pub fn restrict_to(&self, names: &[String]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| names.contains(&entry.name))
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CriteriaCatalog {
    fn default() -> Self {
        Self::single("Pneumonia")
    }
}

impl TryFrom<Vec<CatalogEntry>> for CriteriaCatalog {
    type Error = CatalogError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<CriteriaCatalog> for Vec<CatalogEntry> {
    fn from(catalog: CriteriaCatalog) -> Self {
        catalog.entries
    }
}
