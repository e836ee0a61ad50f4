mod common;

use ectopica_cases::visits::resolve_visit_number;
use ectopica_core::models::visit::VisitNumber;

use common::case_with_visits;

#[test]
fn no_record_is_always_the_first_visit() {
    assert_eq!(resolve_visit_number(None, false), VisitNumber::First);
    assert_eq!(resolve_visit_number(None, true), VisitNumber::First);
}

#[test]
fn case_without_recorded_visits_counts_as_no_record() {
    let case = case_with_visits(&[]);
    assert_eq!(resolve_visit_number(Some(&case), true), VisitNumber::First);
}

#[test]
fn follow_up_after_first_visit_is_second() {
    let case = case_with_visits(&[VisitNumber::First]);
    assert_eq!(resolve_visit_number(Some(&case), true), VisitNumber::Second);
}

#[test]
fn follow_up_after_second_visit_is_third() {
    let case = case_with_visits(&[VisitNumber::First, VisitNumber::Second]);
    assert_eq!(resolve_visit_number(Some(&case), true), VisitNumber::Third);
}

#[test]
fn full_case_never_resolves_past_third() {
    let case = case_with_visits(&[VisitNumber::First, VisitNumber::Second, VisitNumber::Third]);
    assert_eq!(resolve_visit_number(Some(&case), true), VisitNumber::Third);
}

#[test]
fn not_follow_up_is_first_regardless_of_data() {
    let case = case_with_visits(&[VisitNumber::First, VisitNumber::Second]);
    assert_eq!(resolve_visit_number(Some(&case), false), VisitNumber::First);
}
