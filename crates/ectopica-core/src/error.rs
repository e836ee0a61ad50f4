use thiserror::Error;

use crate::models::visit::VisitNumber;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid visit number: {0} (expected 1, 2 or 3)")]
    InvalidVisitNumber(u8),

    #[error("visit {0} is already recorded")]
    VisitAlreadyRecorded(VisitNumber),

    #[error("visit {got} cannot be recorded before visit {expected}")]
    VisitOutOfOrder {
        expected: VisitNumber,
        got: VisitNumber,
    },

    #[error("a case holds at most three visits")]
    VisitLogFull,

    #[error("invalid folio: {0:?}")]
    InvalidFolio(String),
}
