//! # Vaccine Core
//!
//! Client-side business logic of the vaccine-id application.
//!
//! This crate contains the three screens as UI-independent flows and everything they share:
//! - Add, get and search patient flows ([`flows`])
//! - Form date normalization ([`dates`])
//! - Routes and the navigator seam ([`navigation`])
//! - Wire types and the backend seam ([`model`], [`backend`])
//!
//! **No transport concerns**: the HTTP client, credentials and endpoint handling belong in
//! `vaccine-api-client`; the command line belongs in the `vaccine-id` binary.

pub mod backend;
pub mod config;
pub mod constants;
pub mod dates;
pub mod error;
pub mod flows;
pub mod model;
pub mod navigation;
pub mod table;
pub mod validation;

#[cfg(test)]
mod testing;

pub use backend::VaccineIdBackend;
pub use config::ClientConfig;
pub use error::{BackendError, BackendResult, VaccineError, VaccineResult};
pub use flows::{AddPatientFlow, GetPatientFlow, RecordsView, SearchPatientFlow};
pub use navigation::{History, Navigator, Route};
pub use vaccine_types::{NonEmptyText, PatientId};
