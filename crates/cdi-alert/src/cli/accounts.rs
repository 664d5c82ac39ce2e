//! Account loading for CLI commands

use anyhow::Result;
use cdi_alert_diagnostics::CdiError;
use cdi_alert_model::{read_account_file, Account, AccountSource, JsonAccountSource, SourceError};
use std::path::PathBuf;

/// Load accounts from files and directories, in argument order.
///
/// A directory is read as a `JsonAccountSource`, its accounts ordered by
/// account number. A directory entry that is not valid JSON is logged and
/// skipped so the rest of the batch still loads. A named file must decode.
pub async fn load_accounts(paths: &[PathBuf], verbose: bool) -> Result<Vec<Account>> {
    if paths.is_empty() {
        anyhow::bail!("No account files specified");
    }

    let mut accounts = Vec::new();
    let mut skipped = 0;
    for path in paths {
        if path.is_dir() {
            let source = JsonAccountSource::new(path);
            let ids = source
                .list()
                .await
                .map_err(|e| CdiError::from(e).with_context(path.display().to_string()))?;
            for id in ids {
                match source.load(&id).await {
                    Ok(Some(account)) => accounts.push(account),
                    Ok(None) => {}
                    Err(err @ SourceError::Decode { .. }) => {
                        log::warn!("Skipping account {id}: {}", CdiError::from(err));
                        skipped += 1;
                    }
                    Err(err) => return Err(CdiError::from(err).into()),
                }
            }
        } else {
            let account = read_account_file(path).await.map_err(CdiError::from)?;
            accounts.push(account);
        }
    }

    if verbose {
        eprintln!("Loaded {} account(s), skipped {}", accounts.len(), skipped);
    }
    Ok(accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdi_alert_diagnostics::{CDI0404, CDI0406};
    use std::fs;

    #[tokio::test]
    async fn test_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let batch = dir.path().join("batch");
        fs::create_dir(&batch).unwrap();
        fs::write(batch.join("B2.json"), "{}").unwrap();
        fs::write(batch.join("B1.json"), "{}").unwrap();
        let single = dir.path().join("A9.json");
        fs::write(&single, r#"{ "_id": "A9" }"#).unwrap();

        let accounts = load_accounts(&[single, batch], false).await.unwrap();
        let ids: Vec<_> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A9", "B1", "B2"]);
    }

    #[tokio::test]
    async fn test_undecodable_directory_entry_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("A1.json"),
            r#"{ "MatchedCriteriaGroups": [{ "CriteriaGroup": "Pneumonia" }] }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("B2.json"),
            r#"{ "MatchedCriteriaGroups": [{ "CriteriaGroup": "Sepsis", "IsValidated": "yes" }] }"#,
        )
        .unwrap();
        fs::write(dir.path().join("C3.json"), "{ \"_id\": \"C3\", ").unwrap();

        let accounts = load_accounts(&[dir.path().to_path_buf()], false).await.unwrap();
        let ids: Vec<_> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "B2"]);
        assert_eq!(accounts[1].alerts()[0].is_validated, None);
    }

    #[tokio::test]
    async fn test_named_file_must_decode() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("C3.json");
        fs::write(&broken, "{ \"_id\": \"C3\", ").unwrap();

        let err = load_accounts(&[broken], false).await.unwrap_err();
        assert_eq!(err.downcast_ref::<CdiError>().map(CdiError::code), Some(CDI0406));

        let err = load_accounts(&[dir.path().join("missing.json")], false).await.unwrap_err();
        assert_eq!(err.downcast_ref::<CdiError>().map(CdiError::code), Some(CDI0404));
    }

    #[tokio::test]
    async fn test_no_paths() {
        assert!(load_accounts(&[], false).await.is_err());
    }
}
