//! Case state machine.
//!
//! ```text
//! ACTIVE ──close──> CLOSED_NO_ECTOPIC | CLOSED_ECTOPIC | LOST_FOLLOWUP
//! ```
//!
//! All closed states are terminal. Functions here mutate a case in memory
//! only; persisting it is the caller's job.

use jiff::{SignedDuration, Timestamp};

use ectopica_core::models::case::{Case, CaseStatus, PatientInfo, UrgencyColor};
use ectopica_core::models::visit::Visit;

use crate::error::LifecycleError;

const YELLOW_AFTER_HOURS: i64 = 48;
const RED_AFTER_HOURS: i64 = 72;

/// Open a new ACTIVE case for an unseen folio, or mark a new consultation as
/// started on an existing one. An existing case keeps its status, even if
/// terminal.
pub fn create_or_touch(
    existing: Option<Case>,
    folio: &str,
    patient: PatientInfo,
    now: Timestamp,
) -> Case {
    match existing {
        Some(mut case) => {
            case.last_consult_started_at = Some(now);
            case.updated_at = now;
            case
        }
        None => {
            tracing::info!(folio, hospital = %patient.hospital, "case opened");
            Case::new(folio, patient, now)
        }
    }
}

/// Append a scored visit and stamp the case with its finish time and
/// probability. Never changes the status.
///
/// On error the case is left untouched.
pub fn record_visit_result(
    case: &mut Case,
    visit: Visit,
    now: Timestamp,
) -> Result<(), LifecycleError> {
    if case.status.is_terminal() {
        return Err(LifecycleError::CaseClosed {
            folio: case.folio.clone(),
            status: case.status,
        });
    }

    let posterior = visit.result.posterior;
    case.visits.push(visit)?;
    case.last_consult_finished_at = Some(now);
    case.last_risk_probability = Some(posterior);
    case.updated_at = now;
    Ok(())
}

/// Close an ACTIVE case into one of the terminal states.
pub fn close(
    case: &mut Case,
    target: CaseStatus,
    reason: impl Into<String>,
    now: Timestamp,
) -> Result<(), LifecycleError> {
    if case.status.is_terminal() || !target.is_terminal() {
        return Err(LifecycleError::InvalidTransition {
            from: case.status,
            to: target,
        });
    }

    case.status = target;
    case.closure_reason = Some(reason.into());
    case.closed_at = Some(now);
    case.updated_at = now;
    Ok(())
}

/// Follow-up staleness, measured from the last finished consultation (or the
/// last started one if none finished). Always computed against `now`.
pub fn urgency(case: &Case, now: Timestamp) -> UrgencyColor {
    let Some(reference) = case
        .last_consult_finished_at
        .or(case.last_consult_started_at)
    else {
        return UrgencyColor::Neutral;
    };

    let elapsed = now.duration_since(reference);
    if elapsed < SignedDuration::from_hours(YELLOW_AFTER_HOURS) {
        UrgencyColor::Green
    } else if elapsed < SignedDuration::from_hours(RED_AFTER_HOURS) {
        UrgencyColor::Yellow
    } else {
        UrgencyColor::Red
    }
}
