use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::observation::Observation;
use super::risk::RiskResult;
use crate::error::CoreError;

/// One of the three consultation slots tracked per case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum VisitNumber {
    First,
    Second,
    Third,
}

impl VisitNumber {
    pub fn as_u8(self) -> u8 {
        match self {
            VisitNumber::First => 1,
            VisitNumber::Second => 2,
            VisitNumber::Third => 3,
        }
    }

    pub fn next(self) -> Option<VisitNumber> {
        match self {
            VisitNumber::First => Some(VisitNumber::Second),
            VisitNumber::Second => Some(VisitNumber::Third),
            VisitNumber::Third => None,
        }
    }

    pub fn is_follow_up(self) -> bool {
        self != VisitNumber::First
    }
}

impl TryFrom<u8> for VisitNumber {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VisitNumber::First),
            2 => Ok(VisitNumber::Second),
            3 => Ok(VisitNumber::Third),
            other => Err(CoreError::InvalidVisitNumber(other)),
        }
    }
}

impl From<VisitNumber> for u8 {
    fn from(value: VisitNumber) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for VisitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A scored consultation stored on a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Visit {
    #[ts(type = "1 | 2 | 3")]
    pub number: VisitNumber,
    pub observation: Observation,
    pub result: RiskResult,
    pub recorded_at: jiff::Timestamp,
}

/// Ordered, append-only log of at most three visits.
///
/// Visit N can only be appended once visit N-1 exists, so the slots are
/// always filled from the front and a fourth visit cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Visit>", into = "Vec<Visit>")]
pub struct VisitLog(Vec<Visit>);

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot the next appended visit must occupy, or `None` when full.
    pub fn next_slot(&self) -> Option<VisitNumber> {
        match self.0.last() {
            None => Some(VisitNumber::First),
            Some(last) => last.number.next(),
        }
    }

    pub fn push(&mut self, visit: Visit) -> Result<(), CoreError> {
        if self.get(visit.number).is_some() {
            return Err(CoreError::VisitAlreadyRecorded(visit.number));
        }
        let expected = self.next_slot().ok_or(CoreError::VisitLogFull)?;
        if expected != visit.number {
            return Err(CoreError::VisitOutOfOrder {
                expected,
                got: visit.number,
            });
        }
        self.0.push(visit);
        Ok(())
    }

    pub fn get(&self, number: VisitNumber) -> Option<&Visit> {
        self.0.iter().find(|v| v.number == number)
    }

    pub fn contains(&self, number: VisitNumber) -> bool {
        self.get(number).is_some()
    }

    pub fn latest(&self) -> Option<&Visit> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.next_slot().is_none()
    }
}

impl TryFrom<Vec<Visit>> for VisitLog {
    type Error = CoreError;

    fn try_from(visits: Vec<Visit>) -> Result<Self, Self::Error> {
        let mut log = VisitLog::new();
        for visit in visits {
            log.push(visit)?;
        }
        Ok(log)
    }
}

impl From<VisitLog> for Vec<Visit> {
    fn from(log: VisitLog) -> Self {
        log.0
    }
}
