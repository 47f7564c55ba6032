use unicode_segmentation::UnicodeSegmentation;

/// Free-text name attached to a contact as the `USERNAME` attribute.
///
/// Must be instantiated with `Username::parse`, which rejects blank input
/// and anything longer than 256 graphemes. Blank form input should be
/// treated as "no username" by the caller, not passed here.
#[derive(Debug, Clone)]
pub struct Username(String);

impl Username {
    pub fn parse(name: String) -> Result<Self, String> {
        let empty = name.trim().is_empty();
        let too_long = name.graphemes(true).count() > 256;
        match !empty && !too_long {
            true => Ok(Self(name)),
            false => Err(format!("Invalid username: {name:?}")),
        }
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str { &self.0 }
}
