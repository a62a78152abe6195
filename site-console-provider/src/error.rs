use serde::{Deserialize, Serialize};

/// Unified error type for all provisioning backend operations.
///
/// Each variant carries a `backend` field naming the implementation that produced it.
/// The backend contract defines no error taxonomy of its own, so consumers are expected
/// to treat every variant as the same opaque "remote failure"; the variants only exist
/// to give logs something more useful than "it failed".
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError): connection refused, reset, DNS failure
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`Unavailable`](Self::Unavailable): HTTP 429 / 502 / 503 / 504
///
/// The HTTP gateway retries these for read operations only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProvisioningError {
    /// A network-level error occurred.
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    Timeout {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The backend is temporarily unable to serve the request.
    Unavailable {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code, if the failure came from an HTTP response.
        status: Option<u16>,
        /// Suggested wait time in seconds, if the backend provided one.
        retry_after: Option<u64>,
    },

    /// The backend refused the operation.
    Rejected {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code, if the refusal came from an HTTP response.
        status: Option<u16>,
        /// Message returned by the backend.
        message: String,
    },

    /// The backend's response could not be parsed.
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The backend could not be constructed from its configuration.
    InvalidConfig {
        /// Backend that produced the error.
        backend: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Catch-all for failures that do not fit any other variant.
    Unknown {
        /// Backend that produced the error.
        backend: String,
        /// Raw error message.
        raw_message: String,
    },
}

impl ProvisioningError {
    /// Whether a retry of the same request can reasonably succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::Unavailable { .. }
        )
    }

    /// Name of the backend that produced the error.
    #[must_use]
    pub fn backend(&self) -> &str {
        match self {
            Self::NetworkError { backend, .. }
            | Self::Timeout { backend, .. }
            | Self::Unavailable { backend, .. }
            | Self::Rejected { backend, .. }
            | Self::ParseError { backend, .. }
            | Self::InvalidConfig { backend, .. }
            | Self::Unknown { backend, .. } => backend,
        }
    }
}

impl std::fmt::Display for ProvisioningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { backend, detail } => {
                write!(f, "[{backend}] Network error: {detail}")
            }
            Self::Timeout { backend, detail } => {
                write!(f, "[{backend}] Request timeout: {detail}")
            }
            Self::Unavailable {
                backend,
                status,
                retry_after,
            } => {
                write!(f, "[{backend}] Service unavailable")?;
                if let Some(code) = status {
                    write!(f, " (HTTP {code})")?;
                }
                if let Some(secs) = retry_after {
                    write!(f, ", retry after {secs}s")?;
                }
                Ok(())
            }
            Self::Rejected {
                backend,
                status: Some(code),
                message,
            } => {
                write!(f, "[{backend}] Rejected (HTTP {code}): {message}")
            }
            Self::Rejected {
                backend,
                status: None,
                message,
            } => {
                write!(f, "[{backend}] Rejected: {message}")
            }
            Self::ParseError { backend, detail } => {
                write!(f, "[{backend}] Parse error: {detail}")
            }
            Self::InvalidConfig { backend, detail } => {
                write!(f, "[{backend}] Invalid configuration: {detail}")
            }
            Self::Unknown {
                backend,
                raw_message,
            } => {
                write!(f, "[{backend}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProvisioningError {}

/// Convenience type alias for `Result<T, ProvisioningError>`.
pub type Result<T> = std::result::Result<T, ProvisioningError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProvisioningError::NetworkError {
            backend: "http".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[http] Network error: connection refused");
    }

    #[test]
    fn display_unavailable_with_status_and_retry_after() {
        let e = ProvisioningError::Unavailable {
            backend: "http".to_string(),
            status: Some(503),
            retry_after: Some(5),
        };
        assert_eq!(
            e.to_string(),
            "[http] Service unavailable (HTTP 503), retry after 5s"
        );
    }

    #[test]
    fn display_rejected_without_status() {
        let e = ProvisioningError::Rejected {
            backend: "memory".to_string(),
            status: None,
            message: "injected failure".to_string(),
        };
        assert_eq!(e.to_string(), "[memory] Rejected: injected failure");
    }

    #[test]
    fn retryable_classification() {
        let transient = ProvisioningError::Timeout {
            backend: "http".into(),
            detail: "slow".into(),
        };
        let rejected = ProvisioningError::Rejected {
            backend: "http".into(),
            status: Some(400),
            message: "bad".into(),
        };
        let parse = ProvisioningError::ParseError {
            backend: "http".into(),
            detail: "eof".into(),
        };
        assert!(transient.is_retryable());
        assert!(!rejected.is_retryable());
        assert!(!parse.is_retryable());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProvisioningError::Rejected {
            backend: "http".into(),
            status: Some(409),
            message: "taken".into(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Rejected");
        assert_eq!(json["backend"], "http");
        assert_eq!(json["status"], 409);
    }

    #[test]
    fn backend_accessor_covers_all_variants() {
        let e = ProvisioningError::InvalidConfig {
            backend: "http".into(),
            detail: "no base url".into(),
        };
        assert_eq!(e.backend(), "http");
    }
}
