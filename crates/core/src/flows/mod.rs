//! The three screens of the vaccine-id application, independent of any UI toolkit.
//!
//! Every flow follows the same shape: form input, date normalization, one remote call, state
//! update, and optionally a navigation. Flows never call each other; they meet through
//! [`crate::navigation::Route`]s and the shared backend.
//!
//! Operations take `&mut self`, so a flow can have at most one action in flight. A failed action
//! applies nothing, records its message in `last_error` and is never retried.

pub mod add_patient;
pub mod get_patient;
pub mod search_patient;

pub use add_patient::AddPatientFlow;
pub use get_patient::{GetPatientFlow, RecordsView};
pub use search_patient::SearchPatientFlow;

use crate::VaccineResult;

/// Keeps a flow's error indicator in step with the outcome of its latest action.
fn track<T>(last_error: &mut Option<String>, result: VaccineResult<T>) -> VaccineResult<T> {
    match &result {
        Ok(_) => *last_error = None,
        Err(e) => {
            if e.is_remote() {
                tracing::warn!("{}", e);
            }
            *last_error = Some(e.to_string());
        }
    }
    result
}
