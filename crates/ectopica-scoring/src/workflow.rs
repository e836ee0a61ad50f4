use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ectopica_core::models::gate::{
    AbdominalUltrasound, GateKind, GateOutcome, PregnancyTest, VitalSigns,
};
use ectopica_core::models::observation::Observation;
use ectopica_core::models::risk::RiskResult;

use crate::engine;
use crate::error::ScoringError;
use crate::gates::{Gate, PregnancyTestGate, UltrasoundConfirmationGate, VitalSignsGate};

/// Gate data supplied alongside a scoring request. Gates without data are
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GateInputs {
    pub vital_signs: Option<VitalSigns>,
    pub pregnancy_test: Option<PregnancyTest>,
    pub abdominal_ultrasound: Option<AbdominalUltrasound>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringRequest {
    #[serde(flatten)]
    pub observation: Observation,
    #[serde(default)]
    pub is_follow_up: bool,
    #[serde(default)]
    pub prior_probability: Option<f64>,
    #[serde(default)]
    pub gates: GateInputs,
}

/// Outcome of the gate-then-score workflow.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Assessment {
    /// A safety gate stopped the workflow before scoring.
    Halted {
        gate: GateKind,
        outcome: GateOutcome,
    },
    Scored {
        result: RiskResult,
        /// Non-halting gate advisories raised on the way.
        advisories: Vec<GateOutcome>,
    },
}

impl Assessment {
    pub fn result(&self) -> Option<&RiskResult> {
        match self {
            Assessment::Scored { result, .. } => Some(result),
            Assessment::Halted { .. } => None,
        }
    }
}

/// Run the supplied gates in order (vital signs, pregnancy test, ultrasound
/// confirmation), stopping at the first halt; otherwise score the
/// observation.
pub fn assess(request: &ScoringRequest) -> Result<Assessment, ScoringError> {
    assess_with_prior(request, request.prior_probability)
}

/// Like [`assess`], but with the prior probability supplied by the caller
/// (e.g. taken from the case's previous visit) instead of the request.
pub fn assess_with_prior(
    request: &ScoringRequest,
    prior_probability: Option<f64>,
) -> Result<Assessment, ScoringError> {
    let mut advisories = Vec::new();

    if let Some(halted) = run_gate(
        &VitalSignsGate,
        request.gates.vital_signs.as_ref(),
        &mut advisories,
    ) {
        return Ok(halted);
    }
    if let Some(halted) = run_gate(
        &PregnancyTestGate,
        request.gates.pregnancy_test.as_ref(),
        &mut advisories,
    ) {
        return Ok(halted);
    }
    if let Some(halted) = run_gate(
        &UltrasoundConfirmationGate,
        request.gates.abdominal_ultrasound.as_ref(),
        &mut advisories,
    ) {
        return Ok(halted);
    }

    let result = engine::score(&request.observation, request.is_follow_up, prior_probability)?;
    Ok(Assessment::Scored { result, advisories })
}

fn run_gate<G: Gate>(
    gate: &G,
    input: Option<&G::Input>,
    advisories: &mut Vec<GateOutcome>,
) -> Option<Assessment> {
    let outcome = gate.evaluate(input?);
    if outcome.halt {
        return Some(Assessment::Halted {
            gate: gate.kind(),
            outcome,
        });
    }
    if outcome.is_advisory() {
        advisories.push(outcome);
    }
    None
}
