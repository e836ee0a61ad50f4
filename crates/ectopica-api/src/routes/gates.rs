use axum::Json;

use ectopica_core::models::gate::{AbdominalUltrasound, GateOutcome, PregnancyTest, VitalSigns};
use ectopica_scoring::gates::{
    Gate, PregnancyTestGate, UltrasoundConfirmationGate, VitalSignsGate,
};

pub async fn vital_signs(Json(input): Json<VitalSigns>) -> Json<GateOutcome> {
    Json(VitalSignsGate.evaluate(&input))
}

pub async fn pregnancy_test(Json(input): Json<PregnancyTest>) -> Json<GateOutcome> {
    Json(PregnancyTestGate.evaluate(&input))
}

pub async fn ultrasound(Json(input): Json<AbdominalUltrasound>) -> Json<GateOutcome> {
    Json(UltrasoundConfirmationGate.evaluate(&input))
}
