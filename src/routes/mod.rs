mod feedback;
mod health_check;
mod waitlist;
pub use feedback::*;
pub use health_check::*;
pub use waitlist::*;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;

use crate::contacts_client::ProviderAccepted;

/// `{"success": true, "data": ..}` with the provider's status. A provider
/// 204 becomes 200, since this response always has a body.
fn accepted_response(accepted: ProviderAccepted) -> HttpResponse {
    let status = match StatusCode::from_u16(accepted.status) {
        Ok(status) if status != StatusCode::NO_CONTENT => status,
        _ => StatusCode::OK,
    };
    HttpResponse::build(status).json(json!({
        "success": true,
        "data": accepted.data,
    }))
}
