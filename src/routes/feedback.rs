use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;

use super::accepted_response;
use crate::capture_error::CaptureError;
use crate::configuration::ContactsSettings;
use crate::contacts_client::ContactsClient;
use crate::domain::non_blank;
use crate::domain::CaptureFlow;
use crate::domain::CaptureRequest;
use crate::domain::ContactEmail;
use crate::domain::Feedback;
use crate::domain::NewContact;
use crate::domain::Username;

#[derive(Deserialize)]
pub struct FeedbackBody {
    email: String,
    username: Option<String>,
    feedback: Option<String>,
}

impl TryFrom<FeedbackBody> for NewContact {
    type Error = String;
    fn try_from(value: FeedbackBody) -> Result<Self, Self::Error> {
        let email = ContactEmail::parse(value.email)?;
        // blank attributes are dropped, not sent as ""
        let username = non_blank(value.username)
            .map(Username::parse)
            .transpose()?;
        let feedback = non_blank(value.feedback)
            .map(Feedback::parse)
            .transpose()?;
        Ok(NewContact {
            email,
            username,
            feedback,
        })
    }
}

/// `POST /api/feedback`. Adds the contact to the feedback list, with
/// `USERNAME`/`FEEDBACK` attributes when supplied.
///
/// # Request example
///
/// ```sh
///     curl -i -H 'content-type: application/json' \
///         --data '{"email": "john@foo.com", "feedback": "more charts"}' \
///         http://127.0.0.1:8000/api/feedback
/// ```
#[tracing::instrument(
    name = "Submitting feedback",
    skip(body, client, cfg),
    fields(contact_email = %body.email)
)]
pub async fn submit_feedback(
    body: web::Json<FeedbackBody>,
    client: web::Data<ContactsClient>,
    cfg: web::Data<ContactsSettings>,
) -> Result<HttpResponse, CaptureError> {
    let contact: NewContact = body.0.try_into().map_err(CaptureError::Validation)?;
    let flow = CaptureFlow::Feedback;
    let request = CaptureRequest {
        flow,
        contact,
        list_id: flow.list_id(&cfg),
    };
    let accepted = client.forward(&request).await?;
    Ok(accepted_response(accepted))
}
