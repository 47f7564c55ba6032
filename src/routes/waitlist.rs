use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;

use super::accepted_response;
use crate::capture_error::CaptureError;
use crate::configuration::ContactsSettings;
use crate::contacts_client::ContactsClient;
use crate::domain::CaptureFlow;
use crate::domain::CaptureRequest;
use crate::domain::ContactEmail;
use crate::domain::NewContact;

#[derive(Deserialize)]
pub struct WaitlistBody {
    email: String,
}

impl TryFrom<WaitlistBody> for NewContact {
    type Error = String;
    fn try_from(value: WaitlistBody) -> Result<Self, Self::Error> {
        let email = ContactEmail::parse(value.email)?;
        Ok(NewContact::email_only(email))
    }
}

/// `POST /api/waitlist`. Adds the address to the waitlist list.
///
/// # Request example
///
/// ```sh
///     curl -i -H 'content-type: application/json' \
///         --data '{"email": "john@foo.com"}' http://127.0.0.1:8000/api/waitlist
/// ```
///
/// An invalid email is rejected with 400 before the provider is contacted.
#[tracing::instrument(
    name = "Joining waitlist",
    skip(body, client, cfg),
    fields(contact_email = %body.email)
)]
pub async fn join_waitlist(
    body: web::Json<WaitlistBody>,
    client: web::Data<ContactsClient>,
    cfg: web::Data<ContactsSettings>,
) -> Result<HttpResponse, CaptureError> {
    let contact: NewContact = body.0.try_into().map_err(CaptureError::Validation)?;
    let flow = CaptureFlow::Waitlist;
    let request = CaptureRequest {
        flow,
        contact,
        list_id: flow.list_id(&cfg),
    };
    let accepted = client.forward(&request).await?;
    Ok(accepted_response(accepted))
}
