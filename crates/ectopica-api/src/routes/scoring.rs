use axum::Json;
use serde::Serialize;

use ectopica_core::models::gate::{GateKind, GateOutcome};
use ectopica_core::models::risk::{Classification, HcgTrend, HcgZone, SymptomKey};
use ectopica_scoring::engine::advisory_message;
use ectopica_scoring::workflow::{Assessment, ScoringRequest, assess};

use crate::error::ApiError;

/// Wire shape of an [`Assessment`].
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreResponse {
    Scored {
        posterior_probability: f64,
        percentage: String,
        classification: Classification,
        message: &'static str,
        pretest_probability: f64,
        symptom_key: SymptomKey,
        has_risk_factors: bool,
        hcg_zone: HcgZone,
        hcg_trend: HcgTrend,
        likelihood_ratios: Vec<f64>,
        advisories: Vec<GateOutcome>,
    },
    Halted {
        gate: GateKind,
        #[serde(flatten)]
        outcome: GateOutcome,
    },
}

impl From<Assessment> for ScoreResponse {
    fn from(assessment: Assessment) -> Self {
        match assessment {
            Assessment::Halted { gate, outcome } => ScoreResponse::Halted { gate, outcome },
            Assessment::Scored { result, advisories } => ScoreResponse::Scored {
                posterior_probability: result.posterior,
                percentage: result.percentage(),
                classification: result.classification,
                message: advisory_message(result.classification),
                pretest_probability: result.pretest,
                symptom_key: result.symptom_key,
                has_risk_factors: result.has_risk_factors,
                hcg_zone: result.hcg_zone,
                hcg_trend: result.hcg_trend,
                likelihood_ratios: result.likelihood_ratio_values(),
                advisories,
            },
        }
    }
}

/// Stateless scoring: gates then Bayes, nothing is persisted.
pub async fn score(Json(request): Json<ScoringRequest>) -> Result<Json<ScoreResponse>, ApiError> {
    let assessment = assess(&request)?;
    Ok(Json(assessment.into()))
}
