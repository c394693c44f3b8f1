//! The seam between the flows and the vaccine-id API.
//!
//! Flows only talk to the backend through [`VaccineIdBackend`]. The production implementation
//! lives in the `vaccine-api-client` crate and is responsible for the endpoint, credentials and
//! the wire encoding; this crate stays free of transport concerns.

use crate::error::BackendResult;
use crate::model::{
    AddRecordResponse, CreatePatientRequest, CreatePatientResponse, HealthResponse,
    ImmunizationRecord, PatientDetails, SearchPatientRequest, SearchPatientResponse,
};
use async_trait::async_trait;
use vaccine_types::PatientId;

/// An authenticated client for the vaccine-id API.
#[async_trait]
pub trait VaccineIdBackend: Send + Sync {
    /// `POST patient`
    async fn create_patient(&self, req: &CreatePatientRequest)
        -> BackendResult<CreatePatientResponse>;

    /// `GET patient?id=<id>`
    async fn get_patient(&self, id: &PatientId) -> BackendResult<PatientDetails>;

    /// `POST patient/<id>/record`
    async fn add_record(
        &self,
        id: &PatientId,
        record: &ImmunizationRecord,
    ) -> BackendResult<AddRecordResponse>;

    /// `POST patient/search`
    async fn search_patients(&self, req: &SearchPatientRequest)
        -> BackendResult<SearchPatientResponse>;

    /// `GET health`
    async fn health(&self) -> BackendResult<HealthResponse>;
}
