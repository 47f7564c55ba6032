/// Free-text feedback attached to a contact as the `FEEDBACK` attribute.
#[derive(Debug, Clone)]
pub struct Feedback(String);

impl Feedback {
    pub fn parse(text: String) -> Result<Self, String> {
        match text.trim().is_empty() {
            true => Err("Feedback cannot be empty".to_string()),
            false => Ok(Self(text)),
        }
    }
}

impl AsRef<str> for Feedback {
    fn as_ref(&self) -> &str { &self.0 }
}
