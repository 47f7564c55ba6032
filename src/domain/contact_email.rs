use validator::ValidateEmail;

/// The provider deduplicates contacts by this address, so it is the only
/// field that must always be present.
#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        ValidateEmail::validate_email(&email)
            .then_some(Self(email.clone()))
            .ok_or(format!("Invalid email: {email:?}"))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
