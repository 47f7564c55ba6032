use serde_json::Value;

use crate::capture_error::CaptureError;

/// Outcome of forwarding a `CaptureRequest`, normalized for any caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// The provider accepted the contact; `data` is its body, uninterpreted.
    Success { status: u16, data: Value },
    Failure { status: u16, message: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool { matches!(self, SubmissionResult::Success { .. }) }

    /// The status code to surface to the caller
    pub fn http_status(&self) -> u16 {
        match self {
            SubmissionResult::Success { status, .. } | SubmissionResult::Failure { status, .. } => {
                *status
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success { .. } => None,
            SubmissionResult::Failure { message, .. } => Some(message),
        }
    }
}

impl From<CaptureError> for SubmissionResult {
    fn from(e: CaptureError) -> Self {
        SubmissionResult::Failure {
            status: e.status(),
            message: e.to_string(),
        }
    }
}
