use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::domain::CaptureFlow;
use crate::domain::NewContact;
use crate::domain::SubmissionResult;
use crate::gateway::SubmissionGateway;

/// Submits through this service's own `/api/waitlist` and `/api/feedback`
/// routes, so callers never hold the provider API key.
#[derive(Clone)]
pub struct CaptureApiClient {
    http_client: Client,
    /// e.g. `http://localhost:8000`
    base_url: String,
}

#[derive(Serialize)]
struct CaptureBody<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<&'a str>,
}

/// Either `{ "success": true, "data": .. }` or `{ "error": .. }`
#[derive(Deserialize)]
struct CaptureResponse {
    #[serde(default)]
    data: Value,
    error: Option<String>,
}

impl CaptureApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }
}

impl SubmissionGateway for CaptureApiClient {
    #[tracing::instrument(name = "Submitting to capture API", skip(self, contact))]
    async fn submit(
        &self,
        flow: CaptureFlow,
        contact: NewContact,
    ) -> SubmissionResult {
        let body = CaptureBody {
            email: contact.email.as_ref(),
            username: contact.username.as_ref().map(AsRef::as_ref),
            feedback: contact.feedback.as_ref().map(AsRef::as_ref),
        };

        let resp = match self
            .http_client
            .post(format!("{}{}", self.base_url, flow.path()))
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "could not reach capture API"
                );
                return SubmissionResult::Failure {
                    status: 500,
                    message: "Error connecting to the capture API".to_string(),
                };
            }
        };

        let status = resp.status();
        let parsed = resp.json::<CaptureResponse>().await.ok();
        match (status.is_success(), parsed) {
            (true, Some(parsed)) => SubmissionResult::Success {
                status: status.as_u16(),
                data: parsed.data,
            },
            (true, None) => SubmissionResult::Success {
                status: status.as_u16(),
                data: Value::Null,
            },
            (false, parsed) => SubmissionResult::Failure {
                status: status.as_u16(),
                message: parsed
                    .and_then(|p| p.error)
                    .unwrap_or(flow.rejection_message().to_string()),
            },
        }
    }
}
