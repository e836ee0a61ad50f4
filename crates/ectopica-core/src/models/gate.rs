use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The safety gates that run ahead of scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GateKind {
    VitalSigns,
    PregnancyTest,
    UltrasoundConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GateReason {
    PregnancyTestNotPerformed,
    PregnancyTestNegative,
    HypertensiveCrisis,
    HemodynamicInstability,
    SevereTachycardia,
    SevereBradycardia,
    AlteredConsciousness,
    Hypotension,
    Hypertension,
    Tachycardia,
    Bradycardia,
    IntrauterinePregnancyConfirmed,
}

/// Result of a single gate check.
///
/// `halt == false` with a reason is an advisory: the workflow continues but
/// the reason should be surfaced to the clinician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GateOutcome {
    pub halt: bool,
    pub reason: Option<GateReason>,
    pub message: String,
}

impl GateOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            halt: false,
            reason: None,
            message: message.into(),
        }
    }

    pub fn halt(reason: GateReason, message: impl Into<String>) -> Self {
        Self {
            halt: true,
            reason: Some(reason),
            message: message.into(),
        }
    }

    pub fn advisory(reason: GateReason, message: impl Into<String>) -> Self {
        Self {
            halt: false,
            reason: Some(reason),
            message: message.into(),
        }
    }

    pub fn is_advisory(&self) -> bool {
        !self.halt && self.reason.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Consciousness {
    Alert,
    Drowsy,
    Stuporous,
    Comatose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalSigns {
    /// mmHg
    pub systolic: u16,
    /// mmHg
    pub diastolic: u16,
    /// beats per minute
    pub heart_rate: u16,
    pub consciousness: Consciousness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PregnancyTestResult {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PregnancyTest {
    pub performed: bool,
    pub result: Option<PregnancyTestResult>,
}

/// Finding reported by a transabdominal ultrasound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AbdominalFinding {
    EmbryoWithCardiacActivity,
    YolkSacWithEmbryo,
    YolkSacWithoutEmbryo,
    GestationalSacWithoutEmbryo,
    /// Gestational sac >= 10 mm with decidual reaction >= 2 mm.
    SacWithDecidualReaction,
    NoIntrauterineFindings,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AbdominalUltrasound {
    pub performed: bool,
    pub finding: Option<AbdominalFinding>,
}
