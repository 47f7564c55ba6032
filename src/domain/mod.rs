mod capture_flow;
mod capture_request;
mod contact_email;
mod feedback;
mod list_id;
mod new_contact;
mod submission_result;
mod username;
// allow external `use` statements to skip `contact_email` etc
pub use capture_flow::CaptureFlow;
pub use capture_request::CaptureRequest;
pub use contact_email::ContactEmail;
pub use feedback::Feedback;
pub use list_id::ListId;
pub use new_contact::NewContact;
pub use submission_result::SubmissionResult;
pub use username::Username;

/// Optional form text is considered absent when it is missing or blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
