//! Upstream FullToss backend client.
//!
//! The portal keeps no data of its own: OTP issuance/verification and
//! retailer records all come from the upstream FullToss backend over plain
//! JSON-over-HTTP. The endpoints are opaque collaborators; nothing here is
//! retried or cached, and a declared `success: false` is an outcome, not
//! an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use fulltoss_admin::backend::BackendClient;
//!
//! let client = BackendClient::new(config.backend_url().clone());
//!
//! // Ask the backend to text a verification code
//! let sent = client.generate_otp(&phone).await?;
//!
//! // Fetch the full retailer list with nested order history
//! let retailers = client.retailers().await?;
//! ```

use std::sync::Arc;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use fulltoss_core::{PhoneNumber, Retailer};

/// Errors that can occur when talking to the FullToss backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport failed (connect, timeout, or body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success HTTP status.
    #[error("Backend returned status {0}")]
    Status(StatusCode),

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Request body for `POST /generateOtp`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateOtpRequest<'a> {
    phone_number: &'a str,
}

/// Request body for `POST /verifyOtp`.
///
/// Note the asymmetry with `generateOtp`: this endpoint names the field
/// `phone`, not `phoneNumber`. Upstream wire contract, not a typo.
#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    phone: &'a str,
    otp: &'a str,
}

/// Acknowledgement payload shared by both OTP endpoints.
#[derive(Debug, Deserialize)]
struct OtpAck {
    success: bool,
}

/// Response envelope for `GET /retailersData`.
#[derive(Debug, Deserialize)]
struct RetailersResponse {
    data: Vec<Retailer>,
}

/// HTTP client for the upstream FullToss backend.
///
/// Cheap to clone; all clones share one `reqwest::Client` connection pool.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new backend client for the given base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url,
            }),
        }
    }

    /// Join an endpoint path onto the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Ask the backend to send a verification code to `phone`.
    ///
    /// Returns the backend's declared success flag. `false` means the
    /// backend accepted the request but declined to send a code.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, a non-2xx status, or
    /// an undecodable response body.
    #[instrument(skip(self), fields(phone = %phone))]
    pub async fn generate_otp(&self, phone: &PhoneNumber) -> Result<bool, BackendError> {
        let url = self.endpoint("generateOtp")?;
        let body = GenerateOtpRequest {
            phone_number: phone.as_str(),
        };

        let response = self.inner.client.post(url).json(&body).send().await?;
        let ack: OtpAck = check_status(response)?.json().await?;
        Ok(ack.success)
    }

    /// Submit a verification code for `phone`.
    ///
    /// Returns the backend's declared success flag. `false` means the code
    /// was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, a non-2xx status, or
    /// an undecodable response body.
    #[instrument(skip(self, code), fields(phone = %phone))]
    pub async fn verify_otp(&self, phone: &PhoneNumber, code: &str) -> Result<bool, BackendError> {
        let url = self.endpoint("verifyOtp")?;
        let body = VerifyOtpRequest {
            phone: phone.as_str(),
            otp: code,
        };

        let response = self.inner.client.post(url).json(&body).send().await?;
        let ack: OtpAck = check_status(response)?.json().await?;
        Ok(ack.success)
    }

    /// Fetch every retailer record, with nested order history.
    ///
    /// Single request; no pagination, no retry, no partial-failure
    /// handling - the backend either delivers the full list or the call
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on transport failure, a non-2xx status, or
    /// an undecodable response body.
    #[instrument(skip(self))]
    pub async fn retailers(&self) -> Result<Vec<Retailer>, BackendError> {
        let url = self.endpoint("retailersData")?;

        let response = self.inner.client.get(url).send().await?;
        let envelope: RetailersResponse = check_status(response)?.json().await?;
        Ok(envelope.data)
    }
}

/// Reject non-2xx responses before attempting to decode the body.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::Status(status))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_otp_body_uses_phone_number_key() {
        let body = GenerateOtpRequest {
            phone_number: "+15551234567",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "phoneNumber": "+15551234567" })
        );
    }

    #[test]
    fn test_verify_otp_body_uses_phone_and_otp_keys() {
        let body = VerifyOtpRequest {
            phone: "+15551234567",
            otp: "123456",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "phone": "+15551234567", "otp": "123456" })
        );
    }

    #[test]
    fn test_ack_decodes_success_flag() {
        let ack: OtpAck = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.success);

        let ack: OtpAck = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!ack.success);
    }

    #[test]
    fn test_retailers_response_unwraps_data_envelope() {
        let json = r#"{"data": []}"#;
        let envelope: RetailersResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = BackendClient::new("http://localhost:4000/".parse().unwrap());
        let url = client.endpoint("retailersData").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/retailersData");
    }

    #[test]
    fn test_error_display() {
        let err = BackendError::Status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "Backend returned status 502 Bad Gateway");
    }
}
