//! ectopica-scoring
//!
//! Ectopic pregnancy risk scoring. Pure computation, no I/O.
//! Holds the likelihood-ratio tables, the Bayesian odds update, the hCG
//! trend classifier and the safety gates that run ahead of scoring.

pub mod engine;
pub mod error;
pub mod gates;
pub mod tables;
pub mod trend;
pub mod workflow;

pub use engine::score;
pub use workflow::{Assessment, GateInputs, ScoringRequest, assess};
