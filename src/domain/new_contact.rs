use super::ContactEmail;
use super::Feedback;
use super::Username;

/// A fully parsed contact, ready to be attached to a list.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub email: ContactEmail,
    pub username: Option<Username>,
    pub feedback: Option<Feedback>,
}

impl NewContact {
    /// Waitlist contacts carry no attributes.
    pub fn email_only(email: ContactEmail) -> Self {
        Self {
            email,
            username: None,
            feedback: None,
        }
    }
}
