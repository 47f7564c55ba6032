use crate::domain::CaptureFlow;
use crate::modal::FieldError;
use crate::modal::ModalState;
use crate::modal::Phase;

/// Copy shown for any failed submission, whatever the cause.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// What a renderer should show for a given `ModalState`. Purely derived;
/// holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub heading: &'static str,
    pub body: &'static str,
    /// Shown instead of the form once the submission succeeded
    pub success: Option<&'static str>,
    pub submit_label: &'static str,
    /// Disabled only while a submission is in flight
    pub submit_enabled: bool,
    pub field_errors: Vec<FieldError>,
    pub submit_error: Option<String>,
}

impl ModalView {
    pub fn render(
        flow: CaptureFlow,
        state: &ModalState,
    ) -> Self {
        let succeeded = state.phase == Phase::Succeeded;
        let submitting = state.phase == Phase::Submitting;
        let (heading, body, success, submit_label) = match (flow, succeeded, submitting) {
            (CaptureFlow::Waitlist, true, _) => (
                "You're on the list!",
                "We'll notify you when the Basic version is available.",
                Some("Thank you for joining!"),
                "Continue Exploring",
            ),
            (CaptureFlow::Waitlist, false, submitting) => (
                "Join the Waitlist",
                "Be the first to know when our Basic version launches with advanced features.",
                None,
                if submitting { "Submitting..." } else { "Join Waitlist" },
            ),
            (CaptureFlow::Feedback, true, _) => (
                "Thank You!",
                "Thank you for helping us improve Plurse.",
                Some("Feedback Submitted!"),
                "Continue Exploring",
            ),
            (CaptureFlow::Feedback, false, submitting) => (
                "Share Your Feedback",
                "We'd love to hear your thoughts, suggestions, or concerns about Plurse.",
                None,
                if submitting { "Sending..." } else { "Send Feedback" },
            ),
        };

        Self {
            heading,
            body,
            success,
            submit_label,
            submit_enabled: !submitting,
            field_errors: state.field_errors.clone(),
            submit_error: state.submit_error.clone(),
        }
    }
}
