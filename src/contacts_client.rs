use std::time::Duration;

use reqwest::Client;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde_json::Value;

use crate::capture_error::CaptureError;
use crate::domain::CaptureRequest;
use crate::domain::SubmissionResult;

/// Client for the third-party contacts API (`POST /v3/contacts`).
///
/// Cloning is cheap: `reqwest::Client` is an `Arc` internally, so every clone
/// reuses the same connection pool.
#[derive(Clone)]
pub struct ContactsClient {
    http_client: Client,
    base_url: String,
    api_key: Option<Secret<String>>,
    timeout: Option<Duration>,
}

/// A 2xx answer from the provider.
#[derive(Debug)]
pub struct ProviderAccepted {
    pub status: u16,
    /// Passed through untouched; `null` when the provider sent no body
    pub data: Value,
}

impl From<ProviderAccepted> for SubmissionResult {
    fn from(accepted: ProviderAccepted) -> Self {
        SubmissionResult::Success {
            status: accepted.status,
            data: accepted.data,
        }
    }
}

impl ContactsClient {
    pub fn new(
        base_url: String,
        api_key: Option<Secret<String>>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            api_key,
            timeout,
        }
    }

    /// Create (or update, keyed by email) a contact and add it to
    /// `request.list_id`. Exactly one outbound call, never retried.
    ///
    /// Without an API key this fails with `CaptureError::Configuration`
    /// before anything is sent.
    #[tracing::instrument(
        name = "Forwarding contact to provider",
        skip(self, request),
        fields(
            flow = %request.flow,
            list_id = %request.list_id,
            contact_email = %request.contact.email.as_ref(),
        )
    )]
    pub async fn forward(
        &self,
        request: &CaptureRequest,
    ) -> Result<ProviderAccepted, CaptureError> {
        let Some(api_key) = self.api_key.as_ref() else {
            tracing::error!("no API key configured for the contacts provider");
            return Err(CaptureError::Configuration);
        };

        let url = format!("{}/v3/contacts", self.base_url);
        let mut builder = self
            .http_client
            .post(&url)
            .header("accept", "application/json")
            .header("api-key", api_key.expose_secret())
            // also sets `content-type: application/json`
            .json(&request.payload());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await.map_err(transport_failure)?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(transport_failure)?;
        let data = parse_body(&body);

        if !status.is_success() {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(request.flow.rejection_message())
                .to_string();
            tracing::warn!(
                status = status.as_u16(),
                provider.message = %message,
                "contacts provider rejected the request"
            );
            return Err(CaptureError::ProviderRejection {
                status: status.as_u16(),
                message,
            });
        }

        Ok(ProviderAccepted {
            status: status.as_u16(),
            data,
        })
    }

    /// Like `forward`, but folds the error into a `SubmissionResult`.
    pub async fn submit(
        &self,
        request: &CaptureRequest,
    ) -> SubmissionResult {
        match self.forward(request).await {
            Ok(accepted) => accepted.into(),
            Err(e) => e.into(),
        }
    }
}

/// The cause is logged here and dropped from anything a caller can see.
fn transport_failure(e: reqwest::Error) -> CaptureError {
    tracing::error!(
        error.cause_chain = ?e,
        error.message = %e,
        "could not reach contacts provider"
    );
    CaptureError::Transport(e)
}

/// Bodies are opaque: non-JSON text is kept as a string, nothing becomes `null`.
fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
