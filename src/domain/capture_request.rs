use serde::Serialize;

use super::CaptureFlow;
use super::ListId;
use super::NewContact;

/// The unit of work forwarded to the contacts provider.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    pub flow: CaptureFlow,
    pub contact: NewContact,
    pub list_id: ListId,
}

/// Wire format expected by `POST /v3/contacts`.
///
/// `update_enabled` is always `true`: re-submitting an address updates the
/// existing contact instead of creating a duplicate.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload<'a> {
    update_enabled: bool,
    list_ids: [u64; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<ContactAttributes<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ContactAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<&'a str>,
}

impl CaptureRequest {
    pub fn payload(&self) -> ContactPayload<'_> {
        let username = self.contact.username.as_ref().map(AsRef::as_ref);
        let feedback = self.contact.feedback.as_ref().map(AsRef::as_ref);
        // absent attributes are omitted entirely, never sent as ""
        let attributes = match (username, feedback) {
            (None, None) => None,
            (username, feedback) => Some(ContactAttributes { username, feedback }),
        };
        ContactPayload {
            update_enabled: true,
            list_ids: [self.list_id.get()],
            email: Some(self.contact.email.as_ref()),
            attributes,
        }
    }
}
