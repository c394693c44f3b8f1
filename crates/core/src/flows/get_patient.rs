//! Get-patient screen: patient details, immunization history and the add-record form.

use crate::backend::VaccineIdBackend;
use crate::dates::normalize_date;
use crate::model::{ImmunizationRecord, PatientDetails};
use crate::navigation::Route;
use crate::validation::required_text;
use crate::{VaccineError, VaccineResult};
use std::sync::Arc;
use vaccine_types::PatientId;

use super::track;

/// Which half of the screen is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordsView {
    /// The immunization table.
    #[default]
    ViewingRecords,
    /// The add-record form.
    CreatingRecord,
}

/// Shows one patient and appends immunization records to it.
pub struct GetPatientFlow {
    backend: Arc<dyn VaccineIdBackend>,
    route_id: Option<PatientId>,
    patient: Option<PatientDetails>,
    records: Vec<ImmunizationRecord>,
    view: RecordsView,
    last_error: Option<String>,
}

impl GetPatientFlow {
    pub fn new(backend: Arc<dyn VaccineIdBackend>) -> Self {
        Self {
            backend,
            route_id: None,
            patient: None,
            records: Vec::new(),
            view: RecordsView::default(),
            last_error: None,
        }
    }

    /// Initialises the screen from the route it was opened with and fetches the patient.
    ///
    /// # Errors
    ///
    /// Returns `VaccineError::MissingParameter` without fetching anything when the route has no
    /// `id` query parameter. Fetch failures are returned as from [`GetPatientFlow::get_patient`].
    pub async fn init(&mut self, route: &Route) -> VaccineResult<()> {
        self.route_id = route.patient_id();
        match self.route_id.clone() {
            Some(id) => self.get_patient(&id).await,
            None => {
                tracing::error!("missing patient id param in {}", route);
                track(
                    &mut self.last_error,
                    Err(VaccineError::MissingParameter("id")),
                )
            }
        }
    }

    /// Fetches a patient and replaces the details and the immunization table with the response.
    ///
    /// Records are kept in backend order. On failure the previous state is left as it was.
    pub async fn get_patient(&mut self, id: &PatientId) -> VaccineResult<()> {
        tracing::info!("getting patient {}...", id);
        let result = self
            .backend
            .get_patient(id)
            .await
            .map_err(VaccineError::from);

        let result = result.map(|details| {
            self.records = details.immunizations.clone();
            self.patient = Some(details);
        });
        track(&mut self.last_error, result)
    }

    /// Switches from the immunization table to the add-record form.
    pub fn create_record(&mut self) {
        self.view = RecordsView::CreatingRecord;
    }

    /// Submits the add-record form for the patient named by the current route.
    ///
    /// The record date is entered as `M/D/YYYY` and sent as `YYYY-MM-DD`. Once the backend
    /// accepts the record, the screen returns to [`RecordsView::ViewingRecords`] and the patient
    /// identified by the add-record response is fetched again.
    ///
    /// # Errors
    ///
    /// - `VaccineError::Validation` for empty fields or a malformed date; nothing is sent.
    /// - `VaccineError::MissingParameter` when the screen was opened without a patient id.
    /// - `VaccineError::RemoteCall` if the post fails; the form stays open and nothing is added.
    ///   A failing re-fetch after a successful post is reported the same way.
    pub async fn add_record(
        &mut self,
        name: &str,
        manufacturer: &str,
        lot: &str,
        provider: &str,
        date: &str,
    ) -> VaccineResult<()> {
        let result = self
            .post_record(name, manufacturer, lot, provider, date)
            .await;
        match track(&mut self.last_error, result) {
            Ok(echoed_id) => {
                self.view = RecordsView::ViewingRecords;
                self.get_patient(&echoed_id).await
            }
            Err(e) => Err(e),
        }
    }

    async fn post_record(
        &self,
        name: &str,
        manufacturer: &str,
        lot: &str,
        provider: &str,
        date: &str,
    ) -> VaccineResult<PatientId> {
        let record = ImmunizationRecord {
            name: required_text("name", name)?.into_inner(),
            manufacturer: required_text("manufacturer", manufacturer)?.into_inner(),
            lot: required_text("lot", lot)?.into_inner(),
            provider: required_text("provider", provider)?.into_inner(),
            date: normalize_date(date)?,
        };
        let id = self
            .route_id
            .as_ref()
            .ok_or(VaccineError::MissingParameter("id"))?;

        tracing::info!("adding record for patient {}...", id);
        let res = self.backend.add_record(id, &record).await?;
        Ok(res.id)
    }

    pub fn view(&self) -> RecordsView {
        self.view
    }

    /// Identifier read from the route on [`GetPatientFlow::init`].
    pub fn route_id(&self) -> Option<&PatientId> {
        self.route_id.as_ref()
    }

    pub fn patient(&self) -> Option<&PatientDetails> {
        self.patient.as_ref()
    }

    /// The immunization table, in backend order.
    pub fn records(&self) -> &[ImmunizationRecord] {
        &self.records
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
