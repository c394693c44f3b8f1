/// Failures reported by a [`crate::backend::VaccineIdBackend`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode backend response: {0}")]
    Decode(String),
    #[error("patient profile already exists")]
    PatientExists,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Errors surfaced by the flows.
#[derive(Debug, thiserror::Error)]
pub enum VaccineError {
    /// Form input that cannot be sent, such as an empty name or a malformed date.
    #[error("invalid input: {0}")]
    Validation(String),
    /// No patient identifier was available in state or in the navigation context.
    #[error("missing {0} parameter")]
    MissingParameter(&'static str),
    #[error("remote call failed: {0}")]
    RemoteCall(#[from] BackendError),
}

impl VaccineError {
    pub fn is_remote(&self) -> bool {
        matches!(self, VaccineError::RemoteCall(_))
    }
}

pub type VaccineResult<T> = std::result::Result<T, VaccineError>;
