use crate::contact::{FormField, ValidationError};
use std::convert::AsRef;
use std::fmt;

pub const PHONE_MIN_CHARS: usize = 5;
pub const PHONE_MAX_CHARS: usize = 20;

/// Free-text phone number; only its trimmed length is checked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactPhone(String);

impl ContactPhone {
    pub fn parse(phone: &str) -> Result<Self, ValidationError> {
        let trimmed_phone = phone.trim();
        let length = trimmed_phone.chars().count();
        if length < PHONE_MIN_CHARS {
            return Err(ValidationError::new(
                FormField::Phone,
                "Please enter a valid phone number",
            ));
        }
        if length > PHONE_MAX_CHARS {
            return Err(ValidationError::new(
                FormField::Phone,
                "Phone number is too long",
            ));
        }
        Ok(Self(trimmed_phone.to_owned()))
    }
}

impl AsRef<str> for ContactPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactPhone {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
