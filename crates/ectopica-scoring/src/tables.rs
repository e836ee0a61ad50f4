//! Published pretest probabilities and likelihood ratios.
//!
//! Every lookup is an exhaustive match over an enumerated key, so adding a
//! finding or category without a table entry does not compile.

use ectopica_core::models::observation::UltrasoundFinding;
use ectopica_core::models::risk::{HcgTrend, HcgZone, SymptomKey};

/// hCG at or above this level (mUI/mL) falls in the high zone.
pub const HCG_DISCRIMINATORY_ZONE: f64 = 2000.0;

pub const HIGH_PROBABILITY_THRESHOLD: f64 = 0.95;
pub const LOW_PROBABILITY_THRESHOLD: f64 = 0.01;

pub fn pretest_probability(key: SymptomKey, has_risk_factors: bool) -> f64 {
    if has_risk_factors {
        match key {
            SymptomKey::Asymptomatic => 0.05,
            SymptomKey::Bleeding => 0.08,
            SymptomKey::Pain => 0.40,
            SymptomKey::BleedingAndPain => 0.46,
        }
    } else {
        match key {
            SymptomKey::Asymptomatic => 0.017,
            SymptomKey::Bleeding => 0.03,
            SymptomKey::Pain => 0.13,
            SymptomKey::BleedingAndPain => 0.15,
        }
    }
}

pub fn ultrasound_lr(finding: UltrasoundFinding) -> f64 {
    match finding {
        UltrasoundFinding::Normal => 0.07,
        UltrasoundFinding::FreeFluid => 2.4,
        UltrasoundFinding::Mass => 38.0,
        UltrasoundFinding::MassFreeFluid => 47.0,
    }
}

pub fn hcg_lr(finding: UltrasoundFinding, zone: HcgZone) -> f64 {
    match (finding, zone) {
        (UltrasoundFinding::Normal, HcgZone::Low) => 1.0,
        (UltrasoundFinding::Normal, HcgZone::High) => 3.5,
        (UltrasoundFinding::FreeFluid, HcgZone::Low) => 2.0,
        (UltrasoundFinding::FreeFluid, HcgZone::High) => 12.0,
        (UltrasoundFinding::Mass, HcgZone::Low) => 9.0,
        (UltrasoundFinding::Mass, HcgZone::High) => 45.0,
        (UltrasoundFinding::MassFreeFluid, HcgZone::Low) => 21.0,
        (UltrasoundFinding::MassFreeFluid, HcgZone::High) => 55.0,
    }
}

pub fn trend_lr(trend: HcgTrend) -> f64 {
    match trend {
        // Must stay non-zero: a zero ratio forces the posterior to 0.
        HcgTrend::ReductionAtLeast50 => 0.01,
        HcgTrend::Reduction35To50 => 0.8,
        HcgTrend::Reduction1To35 => 16.6,
        HcgTrend::Increase => 3.3,
        HcgTrend::Unavailable => 1.0,
    }
}
