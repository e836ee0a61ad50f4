//! Record key conventions.
//!
//! Pure string functions. These define the canonical layout of case records
//! in whatever keyed store backs the service.

use crate::error::CoreError;

pub const CASES_PREFIX: &str = "cases/";

pub fn case(folio: &str) -> String {
    format!("{CASES_PREFIX}{folio}.json")
}

/// Folios end up in record keys and file names, so only ASCII
/// alphanumerics, `-` and `_` are accepted.
pub fn validate_folio(folio: &str) -> Result<(), CoreError> {
    let valid = !folio.is_empty()
        && folio.len() <= 64
        && folio
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(CoreError::InvalidFolio(folio.to_string()))
    }
}
