use std::fmt::Display;

use crate::configuration::ContactsSettings;
use crate::domain::ListId;

/// The two independent capture flows, each targeting its own mailing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFlow {
    /// Email only
    Waitlist,
    /// Email plus optional username/feedback
    Feedback,
}

impl CaptureFlow {
    /// Default list for this flow, as configured.
    pub fn list_id(
        &self,
        cfg: &ContactsSettings,
    ) -> ListId {
        match self {
            CaptureFlow::Waitlist => cfg.waitlist_list_id,
            CaptureFlow::Feedback => cfg.feedback_list_id,
        }
    }

    /// Used when the provider rejects a contact without saying why.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            CaptureFlow::Waitlist => "Failed to join waitlist",
            CaptureFlow::Feedback => "Failed to submit feedback",
        }
    }

    /// Path of the inbound route serving this flow
    pub fn path(&self) -> &'static str {
        match self {
            CaptureFlow::Waitlist => "/api/waitlist",
            CaptureFlow::Feedback => "/api/feedback",
        }
    }
}

impl Display for CaptureFlow {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CaptureFlow::Waitlist => "waitlist",
                CaptureFlow::Feedback => "feedback",
            }
        )
    }
}
