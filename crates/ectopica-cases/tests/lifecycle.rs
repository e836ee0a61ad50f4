mod common;

use ectopica_cases::error::LifecycleError;
use ectopica_cases::lifecycle::{close, create_or_touch, record_visit_result, urgency};
use ectopica_core::error::CoreError;
use ectopica_core::models::case::{Case, CaseStatus, UrgencyColor};
use ectopica_core::models::visit::VisitNumber;
use jiff::SignedDuration;

use common::{case_with_visits, hours_later, patient, t0, visit};

#[test]
fn unseen_folio_creates_an_active_case() {
    let case = create_or_touch(None, "F-001", patient(), t0());
    assert_eq!(case.folio, "F-001");
    assert_eq!(case.status, CaseStatus::Active);
    assert_eq!(case.last_consult_started_at, Some(t0()));
    assert!(case.visits.is_empty());
}

#[test]
fn touching_keeps_terminal_status() {
    let mut case = Case::new("F-001", patient(), t0());
    close(&mut case, CaseStatus::LostFollowup, "no show", t0()).unwrap();

    let touched = create_or_touch(Some(case), "F-001", patient(), hours_later(5));
    assert_eq!(touched.status, CaseStatus::LostFollowup);
    assert_eq!(touched.last_consult_started_at, Some(hours_later(5)));
}

#[test]
fn recording_a_visit_stamps_finish_time_and_probability() {
    let mut case = Case::new("F-001", patient(), t0());
    let v = visit(VisitNumber::First, 2500.0);
    let posterior = v.result.posterior;

    record_visit_result(&mut case, v, hours_later(1)).unwrap();
    assert_eq!(case.status, CaseStatus::Active);
    assert_eq!(case.last_consult_finished_at, Some(hours_later(1)));
    assert_eq!(case.last_risk_probability, Some(posterior));
    assert_eq!(case.visits.len(), 1);
}

#[test]
fn fourth_visit_is_rejected_and_case_unchanged() {
    let mut case =
        case_with_visits(&[VisitNumber::First, VisitNumber::Second, VisitNumber::Third]);
    let before = case.clone();

    let err = record_visit_result(&mut case, visit(VisitNumber::Third, 100.0), hours_later(3))
        .unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Visit(CoreError::VisitAlreadyRecorded(VisitNumber::Third))
    ));
    assert_eq!(case, before);
}

#[test]
fn visit_on_closed_case_is_rejected() {
    let mut case = case_with_visits(&[VisitNumber::First]);
    close(&mut case, CaseStatus::ClosedNoEctopic, "IUP confirmed", t0()).unwrap();

    let err = record_visit_result(&mut case, visit(VisitNumber::Second, 900.0), t0()).unwrap_err();
    assert!(matches!(err, LifecycleError::CaseClosed { .. }));
    assert_eq!(case.visits.len(), 1);
}

#[test]
fn close_is_terminal_and_second_close_fails() {
    let mut case = case_with_visits(&[VisitNumber::First]);
    close(&mut case, CaseStatus::ClosedEctopic, "laparoscopy", hours_later(2)).unwrap();

    assert_eq!(case.status, CaseStatus::ClosedEctopic);
    assert_eq!(case.closure_reason.as_deref(), Some("laparoscopy"));
    assert_eq!(case.closed_at, Some(hours_later(2)));

    let before = case.clone();
    let err = close(&mut case, CaseStatus::ClosedNoEctopic, "again", hours_later(3)).unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::InvalidTransition {
            from: CaseStatus::ClosedEctopic,
            to: CaseStatus::ClosedNoEctopic
        }
    ));
    assert_eq!(case, before);
}

#[test]
fn closing_into_active_is_invalid() {
    let mut case = Case::new("F-001", patient(), t0());
    let err = close(&mut case, CaseStatus::Active, "noop", t0()).unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
    assert_eq!(case.status, CaseStatus::Active);
}

#[test]
fn urgency_thresholds() {
    let mut case = Case::new("F-001", patient(), t0());
    case.last_consult_finished_at = Some(t0());

    let just_under = t0()
        .checked_add(SignedDuration::from_mins(47 * 60 + 59))
        .unwrap();
    assert_eq!(urgency(&case, just_under), UrgencyColor::Green);
    assert_eq!(urgency(&case, hours_later(48)), UrgencyColor::Yellow);
    assert_eq!(urgency(&case, hours_later(71)), UrgencyColor::Yellow);
    assert_eq!(urgency(&case, hours_later(72)), UrgencyColor::Red);
}

#[test]
fn urgency_without_timestamps_is_neutral() {
    let mut case = Case::new("F-001", patient(), t0());
    case.last_consult_started_at = None;
    assert_eq!(urgency(&case, hours_later(100)), UrgencyColor::Neutral);
}

#[test]
fn urgency_falls_back_to_started_time() {
    let case = Case::new("F-001", patient(), t0());
    assert_eq!(case.last_consult_finished_at, None);
    assert_eq!(urgency(&case, hours_later(50)), UrgencyColor::Yellow);
}

#[test]
fn urgency_prefers_finished_time() {
    let mut case = Case::new("F-001", patient(), t0());
    case.last_consult_finished_at = Some(hours_later(30));
    assert_eq!(urgency(&case, hours_later(70)), UrgencyColor::Green);
}
