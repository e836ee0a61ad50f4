use ectopica_core::models::risk::{HcgTrend, HcgZone};

use crate::tables::HCG_DISCRIMINATORY_ZONE;

pub fn hcg_zone(hcg: f64) -> HcgZone {
    if hcg >= HCG_DISCRIMINATORY_ZONE {
        HcgZone::High
    } else {
        HcgZone::Low
    }
}

/// Classify the change between the previous and current hCG values.
///
/// Any rise is an increase. A fall is bucketed by percent reduction; a fall of
/// less than 1% counts as an increase.
pub fn classify_trend(current: Option<f64>, previous: Option<f64>) -> HcgTrend {
    let (Some(current), Some(previous)) = (current, previous) else {
        return HcgTrend::Unavailable;
    };

    if current > previous {
        return HcgTrend::Increase;
    }
    if previous <= 0.0 {
        return HcgTrend::Unavailable;
    }

    // Rounded so that decimal inputs on a boundary (1.2 -> 0.78 is 35%) land
    // on it instead of just below.
    let reduction = round6((previous - current) * 100.0 / previous);

    if reduction >= 50.0 {
        HcgTrend::ReductionAtLeast50
    } else if reduction >= 35.0 {
        HcgTrend::Reduction35To50
    } else if reduction >= 1.0 {
        HcgTrend::Reduction1To35
    } else {
        HcgTrend::Increase
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
