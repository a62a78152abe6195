//! HTTP request helpers for the provisioning gateway
//!
//! Sending, status classification, response logging and retry live here so the
//! gateway backend only deals with paths and payloads.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProvisioningError;

/// Maximum number of bytes of a response body that reach the logs.
const LOG_BODY_LIMIT: usize = 256;

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// Performs one HTTP request and returns the response text.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any 2xx response
    /// * `Err(ProvisioningError::Unavailable)` for 429 / 502 / 503 / 504
    /// * `Err(ProvisioningError::Rejected)` for every other non-2xx status
    /// * `Err(ProvisioningError::NetworkError | Timeout)` when the request never completed
    pub async fn execute_request(
        request_builder: RequestBuilder,
        backend: &str,
        operation: &str,
    ) -> Result<(u16, String), ProvisioningError> {
        log::debug!("[{backend}] {operation}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProvisioningError::Timeout {
                    backend: backend.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProvisioningError::NetworkError {
                    backend: backend.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{backend}] {operation} -> HTTP {status_code}");

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if matches!(status_code, 429 | 502..=504) {
            log::warn!("[{backend}] {operation} unavailable (HTTP {status_code}), retry_after={retry_after:?}");
            return Err(ProvisioningError::Unavailable {
                backend: backend.to_string(),
                status: Some(status_code),
                retry_after,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProvisioningError::NetworkError {
                backend: backend.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{backend}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if !(200..300).contains(&status_code) {
            return Err(ProvisioningError::Rejected {
                backend: backend.to_string(),
                status: Some(status_code),
                message: rejection_message(&response_text),
            });
        }

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, backend: &str) -> Result<T, ProvisioningError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{backend}] JSON parse failed: {e}");
            log::error!("[{backend}] Raw response: {}", truncate_for_log(response_text));
            ProvisioningError::ParseError {
                backend: backend.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request, retrying transient failures.
    ///
    /// # Retry strategy
    /// - Only [`ProvisioningError::is_retryable`] errors are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... (capped at 10 s)
    /// - `Retry-After` from the gateway wins over the backoff (capped at 30 s)
    ///
    /// Callers must only use this for operations that are safe to repeat.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        backend: &str,
        operation: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ProvisioningError> {
        let mut attempt = 0;
        loop {
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{backend}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, backend, operation).await;
            };

            match Self::execute_request(req, backend, operation).await {
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        backend,
                        operation,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Gateways usually answer `{"message": "..."}` or `{"error": "..."}`; anything else is
/// passed through (truncated).
fn rejection_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "empty response".to_string()
            } else {
                truncate_for_log(body.trim())
            }
        })
}

fn retry_delay(error: &ProvisioningError, attempt: u32) -> Duration {
    if let ProvisioningError::Unavailable {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

/// Cut a string down to [`LOG_BODY_LIMIT`] bytes on a char boundary.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
