//! # API Client
//!
//! HTTP implementation of [`VaccineIdBackend`] for the vaccine-id REST API.
//!
//! Handles:
//! - Resolving resource paths against the configured endpoint
//! - Attaching the bearer token to every request
//! - JSON encoding of requests and decoding of responses
//! - Mapping the backend's plain-text failures onto [`BackendError`]
//!
//! Flow logic lives in `vaccine-core`; this crate only moves bytes.

#![warn(rust_2018_idioms)]

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use vaccine_core::constants::{
    HEALTH_RESOURCE, ID_QUERY_PARAM, PATIENT_RESOURCE, PATIENT_SEARCH_RESOURCE,
};
use vaccine_core::model::{
    AddRecordResponse, CreatePatientRequest, CreatePatientResponse, HealthResponse,
    ImmunizationRecord, PatientDetails, SearchPatientRequest, SearchPatientResponse,
};
use vaccine_core::{BackendError, BackendResult, ClientConfig, PatientId, VaccineIdBackend};

/// Body the backend sends, with a success status, when creating a patient that already exists.
const PATIENT_EXISTS_BODY: &str = "Patient Profile Exists";

/// `reqwest`-backed client for the vaccine-id API.
#[derive(Clone)]
pub struct HttpBackend {
    base: Url,
    access_token: Option<String>,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Builds a client for the endpoint in `cfg`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidRequest` if the endpoint is not a usable base URL, or
    /// `BackendError::Transport` if the HTTP client cannot be constructed.
    pub fn new(cfg: &ClientConfig) -> BackendResult<Self> {
        let base = Url::parse(cfg.endpoint())
            .map_err(|e| BackendError::InvalidRequest(format!("invalid endpoint: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(BackendError::InvalidRequest(format!(
                "endpoint cannot be used as a base URL: {}",
                base
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        Ok(Self {
            base,
            access_token: cfg.access_token().map(str::to_string),
            client,
        })
    }

    /// Resolves resource path segments beneath the endpoint. Each segment is percent-encoded.
    fn url(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidRequest(format!("bad endpoint: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn resource(&self, resource: &str) -> BackendResult<Url> {
        let segments: Vec<&str> = resource.split('/').collect();
        self.url(&segments)
    }

    fn authorize(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    async fn send<T: DeserializeOwned>(&self, rb: RequestBuilder) -> BackendResult<T> {
        let resp = self
            .authorize(rb)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            if body.trim() == PATIENT_EXISTS_BODY {
                BackendError::PatientExists
            } else {
                BackendError::Decode(e.to_string())
            }
        })
    }
}

#[async_trait]
impl VaccineIdBackend for HttpBackend {
    async fn create_patient(
        &self,
        req: &CreatePatientRequest,
    ) -> BackendResult<CreatePatientResponse> {
        let url = self.resource(PATIENT_RESOURCE)?;
        tracing::debug!("POST {}", url);
        self.send(self.client.post(url).json(req)).await
    }

    async fn get_patient(&self, id: &PatientId) -> BackendResult<PatientDetails> {
        let mut url = self.resource(PATIENT_RESOURCE)?;
        url.query_pairs_mut().append_pair(ID_QUERY_PARAM, id.as_str());
        tracing::debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn add_record(
        &self,
        id: &PatientId,
        record: &ImmunizationRecord,
    ) -> BackendResult<AddRecordResponse> {
        let url = self.url(&[PATIENT_RESOURCE, id.as_str(), "record"])?;
        tracing::debug!("POST {}", url);
        self.send(self.client.post(url).json(record)).await
    }

    async fn search_patients(
        &self,
        req: &SearchPatientRequest,
    ) -> BackendResult<SearchPatientResponse> {
        let url = self.resource(PATIENT_SEARCH_RESOURCE)?;
        tracing::debug!("POST {}", url);
        self.send(self.client.post(url).json(req)).await
    }

    async fn health(&self) -> BackendResult<HealthResponse> {
        let url = self.resource(HEALTH_RESOURCE)?;
        tracing::debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }
}
