use crate::contact::{FormField, ValidationError};
use std::convert::AsRef;

pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Optional requirements text. Blank input parses to `None`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(message: &str) -> Result<Option<Self>, ValidationError> {
        let trimmed_message = message.trim();
        if trimmed_message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ValidationError::new(
                FormField::Message,
                "Message is too long",
            ));
        }
        if trimmed_message.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self(trimmed_message.to_owned())))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
