use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use jiff::Timestamp;
use serde::Serialize;
use tokio::sync::{Mutex, OwnedMutexGuard};

use ectopica_core::models::case::{Case, CaseStatus, PatientInfo};
use ectopica_core::models::visit::{Visit, VisitNumber};
use ectopica_core::store_keys;
use ectopica_scoring::workflow::{Assessment, ScoringRequest, assess_with_prior};

use crate::error::{CaseError, LifecycleError};
use crate::lifecycle;
use crate::store::CaseStore;
use crate::visits::resolve_visit_number;

/// Result of submitting a consultation for a folio.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationOutcome {
    pub visit_number: VisitNumber,
    pub assessment: Assessment,
    /// The case after the visit was recorded. For a halted consultation this
    /// is the unchanged stored case, or `None` if the folio is new.
    pub case: Option<Case>,
}

/// Case operations over a store, serialized per folio.
///
/// Every mutation holds the folio's lock across read, visit resolution,
/// scoring and write, so two concurrent submissions for the same folio can
/// never resolve the same visit slot.
pub struct CaseService<S> {
    store: S,
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: CaseStore> CaseService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: StdMutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn get_case(&self, folio: &str) -> Result<Case, CaseError> {
        store_keys::validate_folio(folio)?;
        self.store
            .get(folio)
            .await?
            .ok_or_else(|| CaseError::NotFound {
                folio: folio.to_string(),
            })
    }

    pub async fn list_cases(&self, hospital: Option<&str>) -> Result<Vec<Case>, CaseError> {
        let cases = self.store.list().await?;
        Ok(match hospital {
            Some(hospital) => cases
                .into_iter()
                .filter(|c| c.hospital == hospital)
                .collect(),
            None => cases,
        })
    }

    /// Gate, score and record one consultation.
    ///
    /// On follow-up visits the prior probability and previous hCG come from
    /// the case's latest recorded visit, falling back to the request. Halted
    /// consultations write nothing.
    pub async fn submit_consultation(
        &self,
        folio: &str,
        patient: PatientInfo,
        request: &ScoringRequest,
        now: Timestamp,
    ) -> Result<ConsultationOutcome, CaseError> {
        store_keys::validate_folio(folio)?;

        let guard = self.lock_folio(folio).await;
        let outcome = self.submit_locked(folio, patient, request, now).await;
        drop(guard);
        self.release_folio(folio);

        outcome
    }

    pub async fn close_case(
        &self,
        folio: &str,
        target: CaseStatus,
        reason: &str,
        now: Timestamp,
    ) -> Result<Case, CaseError> {
        store_keys::validate_folio(folio)?;

        let guard = self.lock_folio(folio).await;
        let outcome = self.close_locked(folio, target, reason, now).await;
        drop(guard);
        self.release_folio(folio);

        outcome
    }

    async fn submit_locked(
        &self,
        folio: &str,
        patient: PatientInfo,
        request: &ScoringRequest,
        now: Timestamp,
    ) -> Result<ConsultationOutcome, CaseError> {
        let existing = self.store.get(folio).await?;
        if let Some(case) = &existing
            && case.status.is_terminal()
        {
            return Err(LifecycleError::CaseClosed {
                folio: folio.to_string(),
                status: case.status,
            }
            .into());
        }

        let visit_number = resolve_visit_number(existing.as_ref(), request.is_follow_up);
        let latest = existing.as_ref().and_then(|c| c.latest_visit());

        let mut effective = request.clone();
        effective.is_follow_up = visit_number.is_follow_up();
        let prior = if effective.is_follow_up {
            if effective.observation.previous_hcg.is_none() {
                effective.observation.previous_hcg = latest.and_then(|v| v.observation.hcg);
            }
            latest
                .map(|v| v.result.posterior)
                .or(request.prior_probability)
        } else {
            None
        };

        let assessment = assess_with_prior(&effective, prior)?;
        let Some(result) = assessment.result().cloned() else {
            tracing::info!(folio, visit = %visit_number, "consultation halted by safety gate");
            return Ok(ConsultationOutcome {
                visit_number,
                assessment,
                case: existing,
            });
        };

        let mut case = lifecycle::create_or_touch(existing, folio, patient, now);
        let visit = Visit {
            number: visit_number,
            observation: effective.observation.clone(),
            result: result.clone(),
            recorded_at: now,
        };
        lifecycle::record_visit_result(&mut case, visit, now)?;
        let saved = self.store.save_if_version(&case).await?;

        tracing::info!(
            folio,
            visit = %visit_number,
            posterior = result.posterior,
            classification = ?result.classification,
            "visit recorded"
        );

        Ok(ConsultationOutcome {
            visit_number,
            assessment,
            case: Some(saved),
        })
    }

    async fn close_locked(
        &self,
        folio: &str,
        target: CaseStatus,
        reason: &str,
        now: Timestamp,
    ) -> Result<Case, CaseError> {
        let mut case = self
            .store
            .get(folio)
            .await?
            .ok_or_else(|| CaseError::NotFound {
                folio: folio.to_string(),
            })?;

        lifecycle::close(&mut case, target, reason, now)?;
        let saved = self.store.save_if_version(&case).await?;

        tracing::info!(folio, status = %target, "case closed");
        Ok(saved)
    }

    async fn lock_folio(&self, folio: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.entry(folio.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Drop the folio's lock entry once nobody else holds or waits on it.
    fn release_folio(&self, folio: &str) {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(lock) = locks.get(folio)
            && Arc::strong_count(lock) == 1
        {
            locks.remove(folio);
        }
    }
}
