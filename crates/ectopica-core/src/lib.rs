//! ectopica-core
//!
//! Pure domain types and record key conventions.
//! No scoring logic and no I/O. This is the shared vocabulary of the Ectopica system.

pub mod error;
pub mod models;
pub mod store_keys;
