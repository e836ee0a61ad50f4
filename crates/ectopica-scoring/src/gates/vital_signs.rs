use ectopica_core::models::gate::{Consciousness, GateKind, GateOutcome, GateReason, VitalSigns};

use super::Gate;

/// Emergency screen on blood pressure, heart rate and consciousness.
///
/// Emergencies halt. Otherwise at most one advisory is raised, checked in
/// order: hypotension, hypertension, tachycardia, bradycardia.
pub struct VitalSignsGate;

impl Gate for VitalSignsGate {
    type Input = VitalSigns;

    fn kind(&self) -> GateKind {
        GateKind::VitalSigns
    }

    fn evaluate(&self, v: &VitalSigns) -> GateOutcome {
        if let Some(outcome) = emergency(v) {
            return outcome;
        }
        advisory(v).unwrap_or_else(|| GateOutcome::pass("Vital signs within expected range."))
    }
}

fn emergency(v: &VitalSigns) -> Option<GateOutcome> {
    let (reason, message) = if v.systolic >= 180 || v.diastolic >= 110 {
        (
            GateReason::HypertensiveCrisis,
            "Hypertensive crisis (systolic >= 180 or diastolic >= 110 mmHg). Transfer to emergency care.",
        )
    } else if v.heart_rate > 100 && (v.systolic <= 90 || v.diastolic <= 60) {
        (
            GateReason::HemodynamicInstability,
            "Tachycardia with hypotension suggests hemodynamic instability. Transfer to emergency care immediately.",
        )
    } else if v.heart_rate > 120 {
        (
            GateReason::SevereTachycardia,
            "Severe tachycardia (> 120 bpm). Transfer to emergency care.",
        )
    } else if v.heart_rate < 50 {
        (
            GateReason::SevereBradycardia,
            "Severe bradycardia (< 50 bpm). Transfer to emergency care.",
        )
    } else if v.consciousness != Consciousness::Alert {
        (
            GateReason::AlteredConsciousness,
            "Altered state of consciousness. Transfer to emergency care.",
        )
    } else {
        return None;
    };

    Some(GateOutcome::halt(reason, message))
}

fn advisory(v: &VitalSigns) -> Option<GateOutcome> {
    let (reason, message) = if v.systolic < 90 || v.diastolic < 60 {
        (
            GateReason::Hypotension,
            "Low blood pressure. Monitor closely and reassess before discharge.",
        )
    } else if v.systolic >= 140 || v.diastolic >= 90 {
        (
            GateReason::Hypertension,
            "Elevated blood pressure. Consider hypertensive disorders and recheck.",
        )
    } else if v.heart_rate > 100 {
        (
            GateReason::Tachycardia,
            "Tachycardia. Look for bleeding, pain or infection and recheck.",
        )
    } else if v.heart_rate < 60 {
        (GateReason::Bradycardia, "Bradycardia. Recheck the heart rate.")
    } else {
        return None;
    };

    Some(GateOutcome::advisory(reason, message))
}
