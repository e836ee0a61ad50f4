use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Symptom category used to select the pretest probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomKey {
    Asymptomatic,
    Bleeding,
    Pain,
    BleedingAndPain,
}

/// hCG level relative to the 2000 mUI/mL discriminatory zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HcgZone {
    Low,
    High,
}

/// Change in hCG between two consecutive visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum HcgTrend {
    #[serde(rename = "reduction_at_least_50")]
    ReductionAtLeast50,
    #[serde(rename = "reduction_35_to_50")]
    Reduction35To50,
    #[serde(rename = "reduction_1_to_35")]
    Reduction1To35,
    #[serde(rename = "increase")]
    Increase,
    #[serde(rename = "unavailable")]
    Unavailable,
}

/// Which test finding contributed a likelihood ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LikelihoodSource {
    Ultrasound,
    Hcg,
    HcgTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LikelihoodRatio {
    pub source: LikelihoodSource,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    /// Posterior >= 0.95.
    High,
    Intermediate,
    /// Posterior < 0.01.
    Low,
}

/// Output of one scoring computation. Never mutated after creation; a new
/// observation always produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskResult {
    /// Post-test probability in [0, 1], rounded to 4 decimals.
    pub posterior: f64,
    pub pretest: f64,
    pub symptom_key: SymptomKey,
    pub has_risk_factors: bool,
    pub hcg_zone: HcgZone,
    pub hcg_trend: HcgTrend,
    pub likelihood_ratios: Vec<LikelihoodRatio>,
    pub classification: Classification,
}

impl RiskResult {
    /// Posterior as a percentage string, e.g. `"99.61%"`.
    pub fn percentage(&self) -> String {
        format!("{:.2}%", self.posterior * 100.0)
    }

    pub fn likelihood_ratio_values(&self) -> Vec<f64> {
        self.likelihood_ratios.iter().map(|lr| lr.value).collect()
    }
}
