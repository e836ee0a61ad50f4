use thiserror::Error;

use ectopica_core::error::CoreError;
use ectopica_core::models::case::CaseStatus;
use ectopica_scoring::error::ScoringError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("version mismatch for case {folio} (expected {expected}, found {actual})")]
    VersionMismatch {
        folio: String,
        expected: u64,
        actual: u64,
    },

    #[error("invalid record key: {0}")]
    InvalidKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("cannot transition case from {from} to {to}")]
    InvalidTransition { from: CaseStatus, to: CaseStatus },

    #[error("case {folio} is closed ({status})")]
    CaseClosed { folio: String, status: CaseStatus },

    #[error(transparent)]
    Visit(#[from] CoreError),
}

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("case not found: {folio}")]
    NotFound { folio: String },

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),
}
