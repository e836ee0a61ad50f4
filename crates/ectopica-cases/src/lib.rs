//! ectopica-cases
//!
//! Case lifecycle, visit slot resolution and the keyed case store boundary.
//! Consultations for the same folio are serialized by [`service::CaseService`].

pub mod error;
pub mod lifecycle;
pub mod service;
pub mod store;
pub mod visits;
