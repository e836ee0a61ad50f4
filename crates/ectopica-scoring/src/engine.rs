use ectopica_core::models::observation::{Observation, Symptom};
use ectopica_core::models::risk::{
    Classification, HcgTrend, LikelihoodRatio, LikelihoodSource, RiskResult, SymptomKey,
};

use crate::error::ScoringError;
use crate::tables::{self, HIGH_PROBABILITY_THRESHOLD, LOW_PROBABILITY_THRESHOLD};
use crate::trend::{classify_trend, hcg_zone};

/// Compute the post-test probability of ectopic pregnancy for one visit.
///
/// On a follow-up visit with a `prior_probability`, the table pretest is
/// blended with the prior as `(1 - prior) * pretest + prior`, and the hCG
/// trend against `previous_hcg` contributes a likelihood ratio.
///
/// The ultrasound finding and current hCG are mandatory; they are never
/// defaulted.
pub fn score(
    observation: &Observation,
    is_follow_up: bool,
    prior_probability: Option<f64>,
) -> Result<RiskResult, ScoringError> {
    let ultrasound = observation
        .ultrasound
        .ok_or(ScoringError::IncompleteInput { field: "ultrasound" })?;
    let hcg = observation
        .hcg
        .ok_or(ScoringError::IncompleteInput { field: "hcg" })?;

    validate_hcg("hcg", hcg)?;
    if let Some(previous) = observation.previous_hcg {
        validate_hcg("previous_hcg", previous)?;
    }
    if let Some(prior) = prior_probability
        && !(0.0..=1.0).contains(&prior)
    {
        return Err(ScoringError::InvalidValue {
            field: "prior_probability",
            value: prior,
        });
    }

    let symptom_key = symptom_key(&observation.symptoms);
    let has_risk_factors = observation.has_risk_factors();
    let baseline = tables::pretest_probability(symptom_key, has_risk_factors);
    let pretest = match (is_follow_up, prior_probability) {
        (true, Some(prior)) => (1.0 - prior) * baseline + prior,
        _ => baseline,
    };

    let zone = hcg_zone(hcg);
    let hcg_trend = if is_follow_up {
        classify_trend(Some(hcg), observation.previous_hcg)
    } else {
        HcgTrend::Unavailable
    };

    let mut likelihood_ratios = vec![
        LikelihoodRatio {
            source: LikelihoodSource::Ultrasound,
            value: tables::ultrasound_lr(ultrasound),
        },
        LikelihoodRatio {
            source: LikelihoodSource::Hcg,
            value: tables::hcg_lr(ultrasound, zone),
        },
    ];
    if hcg_trend != HcgTrend::Unavailable {
        likelihood_ratios.push(LikelihoodRatio {
            source: LikelihoodSource::HcgTrend,
            value: tables::trend_lr(hcg_trend),
        });
    }

    let posterior = posterior_probability(pretest, &likelihood_ratios);

    Ok(RiskResult {
        posterior,
        pretest,
        symptom_key,
        has_risk_factors,
        hcg_zone: zone,
        hcg_trend,
        likelihood_ratios,
        classification: classify(posterior),
    })
}

/// Bleeding and pain together (or the explicit combined symptom) always win;
/// syncope is ignored.
pub fn symptom_key(symptoms: &[Symptom]) -> SymptomKey {
    let bleeding = symptoms.contains(&Symptom::Bleeding);
    let pain = symptoms.contains(&Symptom::Pain);
    let combined = symptoms.contains(&Symptom::BleedingAndPain);

    if combined || (bleeding && pain) {
        SymptomKey::BleedingAndPain
    } else if bleeding {
        SymptomKey::Bleeding
    } else if pain {
        SymptomKey::Pain
    } else {
        SymptomKey::Asymptomatic
    }
}

/// Odds-likelihood form of Bayes' rule, rounded to 4 decimals.
pub fn posterior_probability(pretest: f64, likelihood_ratios: &[LikelihoodRatio]) -> f64 {
    if pretest >= 1.0 {
        return 1.0;
    }

    let odds = likelihood_ratios
        .iter()
        .fold(pretest / (1.0 - pretest), |odds, lr| odds * lr.value);
    if odds.is_infinite() {
        return 1.0;
    }

    round4((odds / (1.0 + odds)).clamp(0.0, 1.0))
}

pub fn classify(posterior: f64) -> Classification {
    if posterior >= HIGH_PROBABILITY_THRESHOLD {
        Classification::High
    } else if posterior < LOW_PROBABILITY_THRESHOLD {
        Classification::Low
    } else {
        Classification::Intermediate
    }
}

pub fn advisory_message(classification: Classification) -> &'static str {
    match classification {
        Classification::High => {
            "High probability of ectopic pregnancy. Refer for urgent gynecological evaluation."
        }
        Classification::Intermediate => {
            "Indeterminate probability. Re-evaluate in 48-72 hours with repeat hCG and transvaginal ultrasound."
        }
        Classification::Low => {
            "Low probability of ectopic pregnancy. Continue routine prenatal follow-up."
        }
    }
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn validate_hcg(field: &'static str, value: f64) -> Result<(), ScoringError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ScoringError::InvalidValue { field, value })
    }
}
