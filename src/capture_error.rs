use std::fmt::Debug;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use serde_json::json;

use crate::utils::error_chain_fmt;

/// Everything that can go wrong between an inbound capture request and the
/// contacts provider. Whatever the variant, callers only ever see
/// `{"error": <Display>}`; the `#[source]` is for logs.
#[derive(thiserror::Error)]
pub enum CaptureError {
    #[error("{0}")]
    Validation(String),
    #[error("Contacts API key missing")]
    Configuration,
    #[error("{message}")]
    ProviderRejection { status: u16, message: String },
    #[error("Error connecting to the contacts service")]
    Transport(#[source] reqwest::Error),
}

impl CaptureError {
    /// Status surfaced to the caller; provider rejections pass theirs through.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Configuration | Self::Transport(_) => 500,
            Self::ProviderRejection { status, .. } => *status,
        }
    }
}

impl Debug for CaptureError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for CaptureError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
