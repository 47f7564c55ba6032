use crate::domain::non_blank;
use crate::domain::CaptureFlow;
use crate::domain::ContactEmail;
use crate::domain::Feedback;
use crate::domain::NewContact;
use crate::domain::Username;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Rejected before any network call; see `ModalState.field_errors`
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Username,
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Raw form input, exactly as typed. Only the email is used by the waitlist
/// variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureFields {
    pub email: String,
    pub username: String,
    pub feedback: String,
}

impl CaptureFields {
    pub fn email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            ..Default::default()
        }
    }

    /// Parse into a `NewContact` for `flow`, collecting every field error
    /// rather than stopping at the first.
    pub fn parse(
        &self,
        flow: CaptureFlow,
    ) -> Result<NewContact, Vec<FieldError>> {
        let mut errors = vec![];
        let mut reject = |field, message| errors.push(FieldError { field, message });

        let email = ContactEmail::parse(self.email.clone())
            .map_err(|e| reject(Field::Email, e))
            .ok();

        let (username, feedback) = match flow {
            CaptureFlow::Waitlist => (None, None),
            CaptureFlow::Feedback => {
                let username = match non_blank(Some(self.username.clone())) {
                    Some(name) => Username::parse(name)
                        .map_err(|e| reject(Field::Username, e))
                        .ok(),
                    None => None,
                };
                let feedback = Feedback::parse(self.feedback.clone())
                    .map_err(|e| reject(Field::Feedback, e))
                    .ok();
                (username, feedback)
            }
        };

        match (email, errors.is_empty()) {
            (Some(email), true) => Ok(NewContact {
                email,
                username,
                feedback,
            }),
            _ => Err(errors),
        }
    }
}

/// Snapshot of one modal variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visibility: Visibility,
    pub fields: CaptureFields,
    pub phase: Phase,
    pub field_errors: Vec<FieldError>,
    /// Display-ready, only set in `Phase::Failed`
    pub submit_error: Option<String>,
    /// Input that should receive focus; best-effort, set on open
    pub focus: Option<Field>,
}
