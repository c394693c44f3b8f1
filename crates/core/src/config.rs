//! Client runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the backend client. The
//! library never reads environment variables itself; the binary does that and hands the result
//! to [`ClientConfig::new`].

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::{VaccineError, VaccineResult};
use std::time::Duration;

/// Backend connection settings resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    access_token: Option<String>,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a new `ClientConfig`.
    ///
    /// The endpoint must be an `http://` or `https://` URL. A trailing `/` is appended when
    /// missing so that resource paths resolve beneath it. A blank access token is treated as
    /// no token.
    ///
    /// # Errors
    ///
    /// Returns `VaccineError::Validation` if the endpoint is empty, uses another scheme, or the
    /// timeout is zero.
    pub fn new(
        endpoint: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> VaccineResult<Self> {
        let mut endpoint = endpoint.into().trim().to_string();
        if endpoint.is_empty() {
            return Err(VaccineError::Validation("endpoint cannot be empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(VaccineError::Validation(format!(
                "endpoint must start with http:// or https://, got: '{}'",
                endpoint
            )));
        }
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }

        if timeout.is_zero() {
            return Err(VaccineError::Validation(
                "timeout must be greater than zero".into(),
            ));
        }

        let access_token = access_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            endpoint,
            access_token,
            timeout,
        })
    }

    /// Base URL of the vaccine-id API, always ending in `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Parse the request timeout from an optional string value holding whole seconds.
///
/// If `value` is `None` or empty/whitespace, returns the default timeout.
pub fn timeout_from_env_value(value: Option<String>) -> VaccineResult<Duration> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let secs = match value {
        Some(v) => v.parse::<u64>().map_err(|_| {
            VaccineError::Validation(format!("timeout must be a whole number of seconds, got: '{}'", v))
        })?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_gets_trailing_slash() {
        let cfg = ClientConfig::new("https://api.example.org/vaccine", None, Duration::from_secs(5))
            .unwrap();
        assert_eq!(cfg.endpoint(), "https://api.example.org/vaccine/");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_is_kept() {
        let cfg = ClientConfig::new("http://localhost:8080/", None, Duration::from_secs(5)).unwrap();
        assert_eq!(cfg.endpoint(), "http://localhost:8080/");
    }

    #[test]
    fn test_rejects_empty_endpoint() {
        let result = ClientConfig::new("  ", None, Duration::from_secs(5));
        assert!(matches!(result, Err(VaccineError::Validation(_))));
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let result = ClientConfig::new("ftp://example.org", None, Duration::from_secs(5));
        match result {
            Err(VaccineError::Validation(msg)) => assert!(msg.contains("http://")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = ClientConfig::new("http://localhost", None, Duration::ZERO);
        assert!(matches!(result, Err(VaccineError::Validation(_))));
    }

    #[test]
    fn test_blank_access_token_is_none() {
        let cfg = ClientConfig::new(
            "http://localhost",
            Some("   ".into()),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(cfg.access_token(), None);
    }

    #[test]
    fn test_timeout_from_env_value() {
        assert_eq!(
            timeout_from_env_value(None).unwrap(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(
            timeout_from_env_value(Some(" ".into())).unwrap(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(
            timeout_from_env_value(Some("12".into())).unwrap(),
            Duration::from_secs(12)
        );
        assert!(timeout_from_env_value(Some("soon".into())).is_err());
    }
}
