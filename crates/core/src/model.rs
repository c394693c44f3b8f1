//! Wire types exchanged with the vaccine-id backend.
//!
//! Dates are kept as strings: requests carry the output of [`crate::dates::normalize_date`], and
//! response dates are shown exactly as the backend sent them.

use serde::{Deserialize, Serialize};
use vaccine_types::PatientId;

/// Body of `POST patient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub surname: String,
    pub dob: String,
}

/// Response of `POST patient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePatientResponse {
    pub id: PatientId,
}

/// One immunization entry of a patient.
///
/// The same shape is posted to `patient/<id>/record` and returned inside [`PatientDetails`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmunizationRecord {
    pub name: String,
    pub manufacturer: String,
    pub lot: String,
    pub provider: String,
    pub date: String,
}

/// Response of `GET patient?id=<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub id: PatientId,
    pub name: String,
    pub surname: String,
    pub dob: String,
    #[serde(default)]
    pub immunizations: Vec<ImmunizationRecord>,
}

/// Response of `POST patient/<id>/record`. Echoes the patient the record was added to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRecordResponse {
    pub id: PatientId,
}

/// Body of `POST patient/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPatientRequest {
    pub surname: String,
    pub dob: String,
}

/// A single row of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: PatientId,
    pub name: String,
    pub surname: String,
    pub dob: String,
}

/// Response of `POST patient/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPatientResponse {
    #[serde(default)]
    pub patients: Vec<PatientSummary>,
}

/// Response of `GET health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}
