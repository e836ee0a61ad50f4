use ectopica_core::models::gate::{
    AbdominalFinding, AbdominalUltrasound, GateKind, GateOutcome, GateReason,
};

use super::Gate;

/// Halts when a transabdominal ultrasound already shows an intrauterine
/// pregnancy.
pub struct UltrasoundConfirmationGate;

impl Gate for UltrasoundConfirmationGate {
    type Input = AbdominalUltrasound;

    fn kind(&self) -> GateKind {
        GateKind::UltrasoundConfirmation
    }

    fn evaluate(&self, input: &AbdominalUltrasound) -> GateOutcome {
        if input.performed
            && let Some(finding) = input.finding
            && confirms_intrauterine_pregnancy(finding)
        {
            return GateOutcome::halt(
                GateReason::IntrauterinePregnancyConfirmed,
                "Ultrasound confirms an intrauterine pregnancy. Ectopic pregnancy scoring is not indicated.",
            );
        }

        GateOutcome::pass("No intrauterine pregnancy confirmed. Continue the evaluation.")
    }
}

pub fn confirms_intrauterine_pregnancy(finding: AbdominalFinding) -> bool {
    match finding {
        AbdominalFinding::EmbryoWithCardiacActivity
        | AbdominalFinding::YolkSacWithEmbryo
        | AbdominalFinding::YolkSacWithoutEmbryo
        | AbdominalFinding::GestationalSacWithoutEmbryo
        | AbdominalFinding::SacWithDecidualReaction => true,
        AbdominalFinding::NoIntrauterineFindings | AbdominalFinding::Other => false,
    }
}
