use ectopica_core::models::case::CaseStatus;
use ectopica_core::store_keys::{case, validate_folio};

#[test]
fn case_key_uses_folio() {
    assert_eq!(case("HGZ-0042"), "cases/HGZ-0042.json");
}

#[test]
fn folio_rejects_path_characters() {
    assert!(validate_folio("HGZ-0042_b").is_ok());
    assert!(validate_folio("").is_err());
    assert!(validate_folio("../etc/passwd").is_err());
    assert!(validate_folio("a/b").is_err());
    assert!(validate_folio(&"x".repeat(65)).is_err());
}

#[test]
fn case_status_uses_screaming_case() {
    let json = serde_json::to_string(&CaseStatus::ClosedNoEctopic).unwrap();
    assert_eq!(json, "\"CLOSED_NO_ECTOPIC\"");
    assert_eq!(CaseStatus::LostFollowup.to_string(), "LOST_FOLLOWUP");
    assert!(!CaseStatus::Active.is_terminal());
    assert!(CaseStatus::ClosedEctopic.is_terminal());
}
