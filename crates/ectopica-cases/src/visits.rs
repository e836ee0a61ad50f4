use ectopica_core::models::case::Case;
use ectopica_core::models::visit::VisitNumber;

/// Decide which visit slot an incoming consultation belongs to.
///
/// A case without a recorded first visit counts as no record. There is no
/// fourth slot: once the third visit exists this still resolves to
/// [`VisitNumber::Third`] and the write is rejected downstream.
pub fn resolve_visit_number(existing: Option<&Case>, follow_up_requested: bool) -> VisitNumber {
    let Some(case) = existing.filter(|c| c.visits.contains(VisitNumber::First)) else {
        return VisitNumber::First;
    };
    if !follow_up_requested {
        return VisitNumber::First;
    }

    if case.visits.contains(VisitNumber::Second) {
        VisitNumber::Third
    } else {
        VisitNumber::Second
    }
}
