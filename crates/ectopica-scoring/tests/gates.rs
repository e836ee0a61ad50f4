use ectopica_core::models::gate::{
    AbdominalFinding, AbdominalUltrasound, Consciousness, GateKind, GateReason, PregnancyTest,
    PregnancyTestResult, VitalSigns,
};
use ectopica_scoring::gates::{
    Gate, PregnancyTestGate, UltrasoundConfirmationGate, VitalSignsGate,
};

fn vitals(systolic: u16, diastolic: u16, heart_rate: u16) -> VitalSigns {
    VitalSigns {
        systolic,
        diastolic,
        heart_rate,
        consciousness: Consciousness::Alert,
    }
}

#[test]
fn normal_vitals_pass() {
    let outcome = VitalSignsGate.evaluate(&vitals(115, 75, 80));
    assert!(!outcome.halt);
    assert_eq!(outcome.reason, None);
}

#[test]
fn hypertensive_crisis_halts() {
    let outcome = VitalSignsGate.evaluate(&vitals(180, 80, 80));
    assert!(outcome.halt);
    assert_eq!(outcome.reason, Some(GateReason::HypertensiveCrisis));

    let outcome = VitalSignsGate.evaluate(&vitals(120, 110, 80));
    assert_eq!(outcome.reason, Some(GateReason::HypertensiveCrisis));
}

#[test]
fn tachycardia_with_hypotension_halts() {
    let outcome = VitalSignsGate.evaluate(&vitals(90, 70, 101));
    assert!(outcome.halt);
    assert_eq!(outcome.reason, Some(GateReason::HemodynamicInstability));

    let outcome = VitalSignsGate.evaluate(&vitals(110, 60, 105));
    assert_eq!(outcome.reason, Some(GateReason::HemodynamicInstability));
}

#[test]
fn heart_rate_extremes_halt() {
    let outcome = VitalSignsGate.evaluate(&vitals(120, 80, 121));
    assert!(outcome.halt);
    assert_eq!(outcome.reason, Some(GateReason::SevereTachycardia));

    let outcome = VitalSignsGate.evaluate(&vitals(120, 80, 49));
    assert!(outcome.halt);
    assert_eq!(outcome.reason, Some(GateReason::SevereBradycardia));
}

#[test]
fn altered_consciousness_halts() {
    for state in [
        Consciousness::Drowsy,
        Consciousness::Stuporous,
        Consciousness::Comatose,
    ] {
        let mut v = vitals(115, 75, 80);
        v.consciousness = state;
        let outcome = VitalSignsGate.evaluate(&v);
        assert!(outcome.halt, "{state:?}");
        assert_eq!(outcome.reason, Some(GateReason::AlteredConsciousness));
    }
}

#[test]
fn advisories_do_not_halt_and_follow_priority() {
    // Hypotension beats bradycardia.
    let outcome = VitalSignsGate.evaluate(&vitals(85, 55, 55));
    assert!(!outcome.halt);
    assert!(outcome.is_advisory());
    assert_eq!(outcome.reason, Some(GateReason::Hypotension));

    // Hypertension beats tachycardia.
    let outcome = VitalSignsGate.evaluate(&vitals(150, 85, 110));
    assert!(!outcome.halt);
    assert_eq!(outcome.reason, Some(GateReason::Hypertension));

    let outcome = VitalSignsGate.evaluate(&vitals(120, 80, 110));
    assert_eq!(outcome.reason, Some(GateReason::Tachycardia));

    let outcome = VitalSignsGate.evaluate(&vitals(120, 80, 55));
    assert_eq!(outcome.reason, Some(GateReason::Bradycardia));
}

#[test]
fn pregnancy_test_gate() {
    let gate = PregnancyTestGate;
    assert_eq!(gate.kind(), GateKind::PregnancyTest);

    let not_done = gate.evaluate(&PregnancyTest {
        performed: false,
        result: None,
    });
    assert!(not_done.halt);
    assert_eq!(not_done.reason, Some(GateReason::PregnancyTestNotPerformed));

    let negative = gate.evaluate(&PregnancyTest {
        performed: true,
        result: Some(PregnancyTestResult::Negative),
    });
    assert!(negative.halt);
    assert_eq!(negative.reason, Some(GateReason::PregnancyTestNegative));
    assert!(negative.message.contains("other causes"));

    let positive = gate.evaluate(&PregnancyTest {
        performed: true,
        result: Some(PregnancyTestResult::Positive),
    });
    assert!(!positive.halt);
    assert_eq!(positive.reason, None);
}

#[test]
fn intrauterine_findings_halt() {
    let confirming = [
        AbdominalFinding::EmbryoWithCardiacActivity,
        AbdominalFinding::YolkSacWithEmbryo,
        AbdominalFinding::YolkSacWithoutEmbryo,
        AbdominalFinding::GestationalSacWithoutEmbryo,
        AbdominalFinding::SacWithDecidualReaction,
    ];
    for finding in confirming {
        let outcome = UltrasoundConfirmationGate.evaluate(&AbdominalUltrasound {
            performed: true,
            finding: Some(finding),
        });
        assert!(outcome.halt, "{finding:?}");
        assert_eq!(
            outcome.reason,
            Some(GateReason::IntrauterinePregnancyConfirmed)
        );
    }
}

#[test]
fn ultrasound_gate_passes_without_confirmation() {
    let not_performed = UltrasoundConfirmationGate.evaluate(&AbdominalUltrasound {
        performed: false,
        finding: Some(AbdominalFinding::EmbryoWithCardiacActivity),
    });
    assert!(!not_performed.halt);

    let empty_uterus = UltrasoundConfirmationGate.evaluate(&AbdominalUltrasound {
        performed: true,
        finding: Some(AbdominalFinding::NoIntrauterineFindings),
    });
    assert!(!empty_uterus.halt);
}
