//! Add-patient screen.

use crate::backend::VaccineIdBackend;
use crate::dates::normalize_date;
use crate::model::CreatePatientRequest;
use crate::navigation::{Navigator, Route};
use crate::validation::required_text;
use crate::{VaccineError, VaccineResult};
use std::sync::Arc;
use vaccine_types::PatientId;

use super::track;

/// Creates a patient and links to its details view.
pub struct AddPatientFlow {
    backend: Arc<dyn VaccineIdBackend>,
    submitted: Option<CreatePatientRequest>,
    created: Option<PatientId>,
    last_error: Option<String>,
}

impl AddPatientFlow {
    pub fn new(backend: Arc<dyn VaccineIdBackend>) -> Self {
        Self {
            backend,
            submitted: None,
            created: None,
            last_error: None,
        }
    }

    /// Submits the add-patient form.
    ///
    /// The date of birth is entered as `M/D/YYYY` and sent as `YYYY-MM-DD`. On success the
    /// identifier assigned by the backend is stored for [`AddPatientFlow::get_patient`]; there is
    /// no automatic navigation.
    ///
    /// Any identifier from an earlier submission is discarded first, so after a failure no
    /// identifier is held.
    ///
    /// # Errors
    ///
    /// - `VaccineError::Validation` for an empty name or surname or a malformed date; nothing is
    ///   sent.
    /// - `VaccineError::RemoteCall` if the create request fails, including
    ///   `BackendError::PatientExists` when the patient is already registered.
    pub async fn add_patient(
        &mut self,
        name: &str,
        surname: &str,
        dob: &str,
    ) -> VaccineResult<PatientId> {
        self.created = None;
        let result = self.submit(name, surname, dob).await;
        track(&mut self.last_error, result)
    }

    async fn submit(&mut self, name: &str, surname: &str, dob: &str) -> VaccineResult<PatientId> {
        let req = CreatePatientRequest {
            name: required_text("name", name)?.into_inner(),
            surname: required_text("surname", surname)?.into_inner(),
            dob: normalize_date(dob)?,
        };
        self.submitted = Some(req.clone());

        tracing::info!("creating patient profile...");
        let res = self.backend.create_patient(&req).await?;
        tracing::info!("created patient {}", res.id);

        self.created = Some(res.id.clone());
        Ok(res.id)
    }

    /// Navigates to the details view of the patient created by the last successful submission.
    ///
    /// # Errors
    ///
    /// Returns `VaccineError::MissingParameter` and does not navigate if no patient has been
    /// created yet.
    pub fn get_patient(&mut self, navigator: &mut dyn Navigator) -> VaccineResult<()> {
        let result = match &self.created {
            Some(id) => {
                navigator.navigate(Route::get_patient(id));
                Ok(())
            }
            None => Err(VaccineError::MissingParameter("id")),
        };
        track(&mut self.last_error, result)
    }

    /// Identifier returned by the last successful submission.
    pub fn created_id(&self) -> Option<&PatientId> {
        self.created.as_ref()
    }

    /// The payload of the last submission that passed validation.
    pub fn submitted(&self) -> Option<&CreatePatientRequest> {
        self.submitted.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
