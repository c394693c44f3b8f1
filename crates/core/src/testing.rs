//! In-memory backend used by the flow tests.

use crate::backend::VaccineIdBackend;
use crate::error::{BackendError, BackendResult};
use crate::model::{
    AddRecordResponse, CreatePatientRequest, CreatePatientResponse, HealthResponse,
    ImmunizationRecord, PatientDetails, PatientSummary, SearchPatientRequest,
    SearchPatientResponse,
};
use async_trait::async_trait;
use std::sync::Mutex;
use vaccine_types::PatientId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    CreatePatient(CreatePatientRequest),
    GetPatient(String),
    AddRecord(String, ImmunizationRecord),
    Search(SearchPatientRequest),
    Health,
}

/// Behaves like the real service: assigns ids, stores records, matches searches on
/// surname and dob. Every call is logged.
#[derive(Default)]
pub(crate) struct MockBackend {
    patients: Mutex<Vec<PatientDetails>>,
    calls: Mutex<Vec<Call>>,
    fail_next: Mutex<Option<BackendError>>,
    record_response_id: Mutex<Option<PatientId>>,
}

impl MockBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_patient(self, id: &str, name: &str, surname: &str, dob: &str) -> Self {
        self.patients.lock().unwrap().push(PatientDetails {
            id: PatientId::new(id).unwrap(),
            name: name.into(),
            surname: surname.into(),
            dob: dob.into(),
            immunizations: Vec::new(),
        });
        self
    }

    /// The next call fails with `err` instead of touching the store.
    pub(crate) fn fail_next(&self, err: BackendError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    /// Overrides the id echoed by the next add-record response.
    pub(crate) fn respond_to_record_with(&self, id: &str) {
        *self.record_response_id.lock().unwrap() = Some(PatientId::new(id).unwrap());
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn begin(&self, call: Call) -> BackendResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> BackendError {
        BackendError::Status {
            status: 404,
            message: "Patient Not Found".into(),
        }
    }
}

#[async_trait]
impl VaccineIdBackend for MockBackend {
    async fn create_patient(
        &self,
        req: &CreatePatientRequest,
    ) -> BackendResult<CreatePatientResponse> {
        self.begin(Call::CreatePatient(req.clone()))?;
        let mut patients = self.patients.lock().unwrap();
        if patients
            .iter()
            .any(|p| p.name == req.name && p.surname == req.surname && p.dob == req.dob)
        {
            return Err(BackendError::PatientExists);
        }
        let id = PatientId::new(format!("patient-{}", patients.len() + 1)).unwrap();
        patients.push(PatientDetails {
            id: id.clone(),
            name: req.name.clone(),
            surname: req.surname.clone(),
            dob: req.dob.clone(),
            immunizations: Vec::new(),
        });
        Ok(CreatePatientResponse { id })
    }

    async fn get_patient(&self, id: &PatientId) -> BackendResult<PatientDetails> {
        self.begin(Call::GetPatient(id.to_string()))?;
        self.patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn add_record(
        &self,
        id: &PatientId,
        record: &ImmunizationRecord,
    ) -> BackendResult<AddRecordResponse> {
        self.begin(Call::AddRecord(id.to_string(), record.clone()))?;
        let mut patients = self.patients.lock().unwrap();
        let patient = patients
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(Self::not_found)?;
        patient.immunizations.push(record.clone());
        let echoed = self
            .record_response_id
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| id.clone());
        Ok(AddRecordResponse { id: echoed })
    }

    async fn search_patients(
        &self,
        req: &SearchPatientRequest,
    ) -> BackendResult<SearchPatientResponse> {
        self.begin(Call::Search(req.clone()))?;
        let patients = self
            .patients
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.surname.eq_ignore_ascii_case(&req.surname) && p.dob == req.dob)
            .map(|p| PatientSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                surname: p.surname.clone(),
                dob: p.dob.clone(),
            })
            .collect();
        Ok(SearchPatientResponse { patients })
    }

    async fn health(&self) -> BackendResult<HealthResponse> {
        self.begin(Call::Health)?;
        Ok(HealthResponse {
            status: "online".into(),
        })
    }
}
