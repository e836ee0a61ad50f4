use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A presenting symptom reported at a consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    Bleeding,
    Pain,
    /// Explicit combined tag, equivalent to reporting both bleeding and pain.
    BleedingAndPain,
    /// Recorded for the chart but never used for scoring.
    Syncope,
}

/// Known risk factors for ectopic pregnancy.
///
/// Scoring only cares whether the set is empty; the individual factors are
/// kept for the clinical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFactor {
    PreviousEctopic,
    TubalSurgery,
    PelvicInflammatoryDisease,
    AssistedReproduction,
    IntrauterineDevice,
    Infertility,
    Smoking,
    Other,
}

/// Transvaginal ultrasound finding used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UltrasoundFinding {
    /// No adnexal mass and no free fluid.
    Normal,
    FreeFluid,
    Mass,
    MassFreeFluid,
}

/// Clinical observations collected at a single visit.
///
/// `ultrasound` and `hcg` are optional here so that an incomplete submission
/// can be represented and rejected by the scoring engine with a precise error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Observation {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    pub ultrasound: Option<UltrasoundFinding>,
    /// Serum beta-hCG in mUI/mL.
    pub hcg: Option<f64>,
    /// Serum beta-hCG from the previous visit, if any.
    #[serde(default)]
    pub previous_hcg: Option<f64>,
}

impl Observation {
    pub fn has_risk_factors(&self) -> bool {
        !self.risk_factors.is_empty()
    }
}
