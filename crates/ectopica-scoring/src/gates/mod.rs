//! Safety gates evaluated before scoring.
//!
//! Each gate is independent and stateless. A halt is a valid clinical
//! outcome, not an error: it tells the caller to stop the scoring workflow.

pub mod ultrasound;
pub mod vital_signs;

use ectopica_core::models::gate::{GateKind, GateOutcome};

pub use pregnancy_test::PregnancyTestGate;
pub use ultrasound::UltrasoundConfirmationGate;
pub use vital_signs::VitalSignsGate;

/// Trait implemented by each safety gate.
pub trait Gate: Send + Sync {
    /// The subset of clinical data this gate inspects.
    type Input;

    fn kind(&self) -> GateKind;

    fn evaluate(&self, input: &Self::Input) -> GateOutcome;
}
