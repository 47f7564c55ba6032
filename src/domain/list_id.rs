use std::fmt::Display;

use serde::Deserialize;

/// Identifier of a mailing list on the provider side. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct ListId(u64);

impl TryFrom<u64> for ListId {
    type Error = String;
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Err("List id must be a positive integer".to_string()),
            v => Ok(Self(v)),
        }
    }
}

impl ListId {
    pub const WAITLIST_DEFAULT: ListId = ListId(8);
    pub const FEEDBACK_DEFAULT: ListId = ListId(9);

    pub fn get(&self) -> u64 { self.0 }
}

impl Display for ListId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
