//! Keyed case store boundary.
//!
//! Stores are plain key/value persistence; they know nothing about the
//! lifecycle. Writes use optimistic locking on [`Case::version`], the same
//! way an object store guards a write with `If-Match` on an ETag.

mod file;
mod memory;

use std::future::Future;

use ectopica_core::models::case::Case;

use crate::error::StoreError;

pub use file::FileCaseStore;
pub use memory::MemoryCaseStore;

pub trait CaseStore: Send + Sync {
    fn get(&self, folio: &str) -> impl Future<Output = Result<Option<Case>, StoreError>> + Send;

    /// Persist `case` only if the stored version still equals `case.version`
    /// (0 meaning "must not exist yet"). Returns the stored copy with its
    /// version incremented. On mismatch nothing is written.
    fn save_if_version(&self, case: &Case)
    -> impl Future<Output = Result<Case, StoreError>> + Send;

    /// All stored cases, ordered by folio.
    fn list(&self) -> impl Future<Output = Result<Vec<Case>, StoreError>> + Send;
}

/// Store selected at startup from configuration.
pub enum AnyCaseStore {
    Memory(MemoryCaseStore),
    File(FileCaseStore),
}

impl CaseStore for AnyCaseStore {
    async fn get(&self, folio: &str) -> Result<Option<Case>, StoreError> {
        match self {
            AnyCaseStore::Memory(store) => store.get(folio).await,
            AnyCaseStore::File(store) => store.get(folio).await,
        }
    }

    async fn save_if_version(&self, case: &Case) -> Result<Case, StoreError> {
        match self {
            AnyCaseStore::Memory(store) => store.save_if_version(case).await,
            AnyCaseStore::File(store) => store.save_if_version(case).await,
        }
    }

    async fn list(&self) -> Result<Vec<Case>, StoreError> {
        match self {
            AnyCaseStore::Memory(store) => store.list().await,
            AnyCaseStore::File(store) => store.list().await,
        }
    }
}

fn check_version(folio: &str, expected: u64, actual: u64) -> Result<(), StoreError> {
    if expected == actual {
        Ok(())
    } else {
        Err(StoreError::VersionMismatch {
            folio: folio.to_string(),
            expected,
            actual,
        })
    }
}
