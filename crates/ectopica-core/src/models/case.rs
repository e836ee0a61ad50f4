use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::visit::{Visit, VisitLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum CaseStatus {
    Active,
    ClosedNoEctopic,
    ClosedEctopic,
    LostFollowup,
}

impl CaseStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, CaseStatus::Active)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaseStatus::Active => "ACTIVE",
            CaseStatus::ClosedNoEctopic => "CLOSED_NO_ECTOPIC",
            CaseStatus::ClosedEctopic => "CLOSED_ECTOPIC",
            CaseStatus::LostFollowup => "LOST_FOLLOWUP",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifying details captured when a case is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo {
    pub hospital: String,
    pub patient_name: String,
    pub patient_age: Option<u8>,
    pub doctor: String,
}

/// A patient's follow-up case, keyed by folio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Case {
    pub folio: String,
    pub hospital: String,
    pub patient_name: String,
    pub patient_age: Option<u8>,
    pub doctor: String,
    pub status: CaseStatus,
    #[ts(as = "Vec<Visit>")]
    #[serde(default)]
    pub visits: VisitLog,
    pub last_consult_started_at: Option<jiff::Timestamp>,
    pub last_consult_finished_at: Option<jiff::Timestamp>,
    pub last_risk_probability: Option<f64>,
    pub closure_reason: Option<String>,
    pub closed_at: Option<jiff::Timestamp>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    /// Incremented on every successful save; used for optimistic locking.
    #[serde(default)]
    pub version: u64,
}

impl Case {
    /// A fresh ACTIVE case with no visits and an unsaved version of 0.
    pub fn new(folio: impl Into<String>, patient: PatientInfo, now: jiff::Timestamp) -> Self {
        Self {
            folio: folio.into(),
            hospital: patient.hospital,
            patient_name: patient.patient_name,
            patient_age: patient.patient_age,
            doctor: patient.doctor,
            status: CaseStatus::Active,
            visits: VisitLog::new(),
            last_consult_started_at: Some(now),
            last_consult_finished_at: None,
            last_risk_probability: None,
            closure_reason: None,
            closed_at: None,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn latest_visit(&self) -> Option<&Visit> {
        self.visits.latest()
    }
}

/// Follow-up staleness label derived from the last consultation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UrgencyColor {
    Neutral,
    Green,
    Yellow,
    Red,
}
