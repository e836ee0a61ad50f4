use std::collections::HashMap;

use tokio::sync::RwLock;

use ectopica_core::models::case::Case;

use super::{CaseStore, check_version};
use crate::error::StoreError;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryCaseStore {
    cases: RwLock<HashMap<String, Case>>,
}

impl MemoryCaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CaseStore for MemoryCaseStore {
    async fn get(&self, folio: &str) -> Result<Option<Case>, StoreError> {
        Ok(self.cases.read().await.get(folio).cloned())
    }

    async fn save_if_version(&self, case: &Case) -> Result<Case, StoreError> {
        let mut cases = self.cases.write().await;
        let actual = cases.get(&case.folio).map_or(0, |c| c.version);
        check_version(&case.folio, case.version, actual)?;

        let mut saved = case.clone();
        saved.version = actual + 1;
        cases.insert(saved.folio.clone(), saved.clone());
        Ok(saved)
    }

    async fn list(&self) -> Result<Vec<Case>, StoreError> {
        let mut cases: Vec<Case> = self.cases.read().await.values().cloned().collect();
        cases.sort_by(|a, b| a.folio.cmp(&b.folio));
        Ok(cases)
    }
}
