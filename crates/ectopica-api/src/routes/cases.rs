use axum::Json;
use axum::extract::{Path, Query, State};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use ectopica_cases::lifecycle;
use ectopica_core::models::case::{Case, CaseStatus, PatientInfo, UrgencyColor};
use ectopica_core::models::visit::VisitNumber;
use ectopica_scoring::workflow::ScoringRequest;

use crate::error::ApiError;
use crate::routes::scoring::ScoreResponse;
use crate::state::AppState;

/// A case with its urgency derived at read time.
#[derive(Debug, Serialize)]
pub struct CaseView {
    #[serde(flatten)]
    pub case: Case,
    pub urgency: UrgencyColor,
}

impl CaseView {
    fn at(case: Case, now: Timestamp) -> Self {
        let urgency = lifecycle::urgency(&case, now);
        Self { case, urgency }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseSummary {
    pub folio: String,
    pub hospital: String,
    pub patient_name: String,
    pub doctor: String,
    pub status: CaseStatus,
    pub visit_count: usize,
    pub last_risk_probability: Option<f64>,
    pub last_consult_finished_at: Option<Timestamp>,
    pub urgency: UrgencyColor,
}

impl CaseSummary {
    fn at(case: &Case, now: Timestamp) -> Self {
        Self {
            folio: case.folio.clone(),
            hospital: case.hospital.clone(),
            patient_name: case.patient_name.clone(),
            doctor: case.doctor.clone(),
            status: case.status,
            visit_count: case.visits.len(),
            last_risk_probability: case.last_risk_probability,
            last_consult_finished_at: case.last_consult_finished_at,
            urgency: lifecycle::urgency(case, now),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub hospital: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConsultationRequest {
    pub patient: PatientInfo,
    #[serde(flatten)]
    pub scoring: ScoringRequest,
}

#[derive(Debug, Serialize)]
pub struct ConsultationResponse {
    pub visit_number: VisitNumber,
    pub assessment: ScoreResponse,
    pub case: Option<CaseView>,
}

#[derive(Debug, Deserialize)]
pub struct CloseRequest {
    pub status: CaseStatus,
    pub reason: String,
}

pub async fn list_cases(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CaseSummary>>, ApiError> {
    let cases = state.cases.list_cases(query.hospital.as_deref()).await?;
    let now = Timestamp::now();
    Ok(Json(cases.iter().map(|c| CaseSummary::at(c, now)).collect()))
}

pub async fn get_case(
    State(state): State<AppState>,
    Path(folio): Path<String>,
) -> Result<Json<CaseView>, ApiError> {
    let case = state.cases.get_case(&folio).await?;
    Ok(Json(CaseView::at(case, Timestamp::now())))
}

pub async fn submit_consultation(
    State(state): State<AppState>,
    Path(folio): Path<String>,
    Json(request): Json<ConsultationRequest>,
) -> Result<Json<ConsultationResponse>, ApiError> {
    let now = Timestamp::now();
    let outcome = state
        .cases
        .submit_consultation(&folio, request.patient, &request.scoring, now)
        .await?;

    Ok(Json(ConsultationResponse {
        visit_number: outcome.visit_number,
        assessment: outcome.assessment.into(),
        case: outcome.case.map(|c| CaseView::at(c, now)),
    }))
}

pub async fn close_case(
    State(state): State<AppState>,
    Path(folio): Path<String>,
    Json(request): Json<CloseRequest>,
) -> Result<Json<CaseView>, ApiError> {
    let now = Timestamp::now();
    let case = state
        .cases
        .close_case(&folio, request.status, &request.reason, now)
        .await?;
    Ok(Json(CaseView::at(case, now)))
}
