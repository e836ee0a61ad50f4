use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("incomplete input: {field} is required for scoring")]
    IncompleteInput { field: &'static str },

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}
