use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use ectopica_core::models::case::Case;
use ectopica_core::store_keys;

use super::{CaseStore, check_version};
use crate::error::StoreError;

/// One pretty-printed JSON file per case under `<root>/cases/`.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never leaves a truncated record behind.
pub struct FileCaseStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCaseStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(root.join(store_keys::CASES_PREFIX)).await?;
        tracing::debug!(root = %root.display(), "file case store opened");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    fn path(&self, folio: &str) -> Result<PathBuf, StoreError> {
        store_keys::validate_folio(folio).map_err(|_| StoreError::InvalidKey(folio.to_string()))?;
        Ok(self.root.join(store_keys::case(folio)))
    }

    async fn read(path: &Path) -> Result<Option<Case>, StoreError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl CaseStore for FileCaseStore {
    async fn get(&self, folio: &str) -> Result<Option<Case>, StoreError> {
        let path = self.path(folio)?;
        Self::read(&path).await
    }

    async fn save_if_version(&self, case: &Case) -> Result<Case, StoreError> {
        let path = self.path(&case.folio)?;
        let _guard = self.write_lock.lock().await;

        let actual = Self::read(&path).await?.map_or(0, |c| c.version);
        check_version(&case.folio, case.version, actual)?;

        let mut saved = case.clone();
        saved.version = actual + 1;

        let json = serde_json::to_vec_pretty(&saved)?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(
            path = %path.display(),
            version = saved.version,
            "case flushed to disk"
        );
        Ok(saved)
    }

    async fn list(&self) -> Result<Vec<Case>, StoreError> {
        let mut entries = tokio::fs::read_dir(self.root.join(store_keys::CASES_PREFIX)).await?;
        let mut cases = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(case) = Self::read(&path).await? {
                cases.push(case);
            }
        }
        cases.sort_by(|a, b| a.folio.cmp(&b.folio));
        Ok(cases)
    }
}
