//! Account sources
//!
//! The host platform owns account storage. These traits describe the
//! boundary; the JSON implementation reads the host's exported documents
//! from disk.

use crate::account::Account;
use async_trait::async_trait;
use cdi_alert_diagnostics::{CdiError, CDI0401, CDI0404, CDI0406};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Account file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to decode account from {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<SourceError> for CdiError {
    fn from(err: SourceError) -> Self {
        let code = match err {
            SourceError::NotFound(_) => CDI0404,
            SourceError::Io { .. } => CDI0401,
            SourceError::Decode { .. } => CDI0406,
        };
        let message = match std::error::Error::source(&err) {
            Some(cause) => format!("{err}: {cause}"),
            None => err.to_string(),
        };
        CdiError::system(code, message)
    }
}

/// Trait for loading accounts from the host's data store
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Load one account by account number
    async fn load(&self, id: &str) -> Result<Option<Account>, SourceError>;

    /// Account numbers available from this source, in a stable order
    async fn list(&self) -> Result<Vec<String>, SourceError>;
}

/// Read one account document. A document without an id takes the file stem.
pub async fn read_account_file(path: &Path) -> Result<Account, SourceError> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(SourceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut account: Account =
        serde_json::from_str(&contents).map_err(|source| SourceError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if account.id.is_empty() {
        if let Some(stem) = path.file_stem() {
            account.id = stem.to_string_lossy().into_owned();
        }
    }

    log::debug!(
        "Loaded account {:?} with {} alert record(s) from {}",
        account.id,
        account.alerts().len(),
        path.display()
    );
    Ok(account)
}

/// Directory of `<account number>.json` documents
pub struct JsonAccountSource {
    root: PathBuf,
}

impl JsonAccountSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

#[async_trait]
impl AccountSource for JsonAccountSource {
    async fn load(&self, id: &str) -> Result<Option<Account>, SourceError> {
        match read_account_file(&self.path_for(id)).await {
            Ok(account) => Ok(Some(account)),
            Err(SourceError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list(&self) -> Result<Vec<String>, SourceError> {
        let io_err = |source| SourceError::Io {
            path: self.root.clone(),
            source,
        };
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(io_err)?;

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                log::warn!("Skipping non-JSON file {}", path.display());
                continue;
            }
            if let Some(stem) = path.file_stem() {
                ids.push(stem.to_string_lossy().into_owned());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
