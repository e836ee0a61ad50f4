#![allow(dead_code)]

use ectopica_core::models::case::{Case, PatientInfo};
use ectopica_core::models::observation::{Observation, Symptom, UltrasoundFinding};
use ectopica_core::models::visit::{Visit, VisitNumber};
use ectopica_scoring::ScoringRequest;
use jiff::{SignedDuration, Timestamp};

pub fn t0() -> Timestamp {
    Timestamp::from_second(1_700_000_000).unwrap()
}

pub fn hours_later(hours: i64) -> Timestamp {
    t0().checked_add(SignedDuration::from_hours(hours)).unwrap()
}

pub fn patient() -> PatientInfo {
    PatientInfo {
        hospital: "HGZ-1".to_string(),
        patient_name: "Ana Torres".to_string(),
        patient_age: Some(29),
        doctor: "Dr. Ruiz".to_string(),
    }
}

pub fn observation(hcg: f64) -> Observation {
    Observation {
        symptoms: vec![Symptom::Pain],
        risk_factors: Vec::new(),
        ultrasound: Some(UltrasoundFinding::Mass),
        hcg: Some(hcg),
        previous_hcg: None,
    }
}

pub fn request(hcg: f64, is_follow_up: bool) -> ScoringRequest {
    ScoringRequest {
        observation: observation(hcg),
        is_follow_up,
        ..ScoringRequest::default()
    }
}

pub fn visit(number: VisitNumber, hcg: f64) -> Visit {
    let obs = observation(hcg);
    let result = ectopica_scoring::score(&obs, number.is_follow_up(), None).unwrap();
    Visit {
        number,
        observation: obs,
        result,
        recorded_at: t0(),
    }
}

pub fn case_with_visits(numbers: &[VisitNumber]) -> Case {
    let mut case = Case::new("F-001", patient(), t0());
    for number in numbers {
        ectopica_cases::lifecycle::record_visit_result(&mut case, visit(*number, 2500.0), t0())
            .unwrap();
    }
    case
}
