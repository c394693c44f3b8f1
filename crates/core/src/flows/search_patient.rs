//! Search-patient screen.

use crate::backend::VaccineIdBackend;
use crate::dates::normalize_date;
use crate::model::{PatientSummary, SearchPatientRequest};
use crate::navigation::{Navigator, Route};
use crate::validation::required_text;
use crate::{VaccineError, VaccineResult};
use std::sync::Arc;
use vaccine_types::PatientId;

use super::track;

/// Finds patients by surname and date of birth.
pub struct SearchPatientFlow {
    backend: Arc<dyn VaccineIdBackend>,
    criteria: Option<SearchPatientRequest>,
    results: Vec<PatientSummary>,
    last_error: Option<String>,
}

impl SearchPatientFlow {
    pub fn new(backend: Arc<dyn VaccineIdBackend>) -> Self {
        Self {
            backend,
            criteria: None,
            results: Vec::new(),
            last_error: None,
        }
    }

    /// Submits the search form and replaces the result table with the matches.
    ///
    /// An empty match list is a normal outcome. On failure the previous table is left as it was.
    pub async fn search_patient(&mut self, surname: &str, dob: &str) -> VaccineResult<()> {
        let result = self.search(surname, dob).await;
        track(&mut self.last_error, result)
    }

    async fn search(&mut self, surname: &str, dob: &str) -> VaccineResult<()> {
        let req = SearchPatientRequest {
            surname: required_text("surname", surname)?.into_inner(),
            dob: normalize_date(dob)?,
        };
        self.criteria = Some(req.clone());

        tracing::info!("searching patients...");
        let res = self.backend.search_patients(&req).await?;
        tracing::info!("search matched {} patient(s)", res.patients.len());

        self.results = res.patients;
        Ok(())
    }

    /// Opens the details view of a patient.
    pub fn get_patient(&self, id: &PatientId, navigator: &mut dyn Navigator) {
        navigator.navigate(Route::get_patient(id));
    }

    /// Opens the details view of the result row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `VaccineError::Validation` if there is no such row.
    pub fn open_row(&self, index: usize, navigator: &mut dyn Navigator) -> VaccineResult<()> {
        let row = self.results.get(index).ok_or_else(|| {
            VaccineError::Validation(format!(
                "no search result at row {} ({} row(s) shown)",
                index,
                self.results.len()
            ))
        })?;
        self.get_patient(&row.id, navigator);
        Ok(())
    }

    /// The criteria of the last search that passed validation, as sent.
    pub fn criteria(&self) -> Option<&SearchPatientRequest> {
        self.criteria.as_ref()
    }

    /// The result table, in backend order.
    pub fn results(&self) -> &[PatientSummary] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
