//! Input validation utilities.
//!
//! Form fields are checked here before any request is built, so a rejected field never reaches
//! the backend.

use crate::{VaccineError, VaccineResult};
use vaccine_types::{NonEmptyText, PatientId};

/// Validates that a form field carries content and returns it trimmed.
///
/// # Arguments
///
/// * `field` - Field name used in the error message.
/// * `value` - Raw form input.
///
/// # Errors
///
/// Returns `VaccineError::Validation` if the value is empty or whitespace only.
pub fn required_text(field: &str, value: &str) -> VaccineResult<NonEmptyText> {
    NonEmptyText::new(value).map_err(|_| VaccineError::Validation(format!("{field} is required")))
}

/// Validates a patient identifier typed or pasted by a user.
pub fn required_patient_id(value: &str) -> VaccineResult<PatientId> {
    PatientId::new(value).map_err(|_| VaccineError::Validation("patient id is required".into()))
}
