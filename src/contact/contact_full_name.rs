use crate::contact::{FormField, ValidationError};
use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;

pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const FULL_NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactFullName(String);

impl ContactFullName {
    pub fn new(full_name: &str) -> Result<Self, ValidationError> {
        Self::parse(full_name)
    }
    pub fn parse(full_name: &str) -> Result<Self, ValidationError> {
        let trimmed_name = full_name.trim();
        let length = trimmed_name.chars().count();
        if length < FULL_NAME_MIN_CHARS {
            return Err(ValidationError::new(
                FormField::FullName,
                "Name must be at least 2 characters",
            ));
        }
        if length > FULL_NAME_MAX_CHARS {
            return Err(ValidationError::new(FormField::FullName, "Name is too long"));
        }
        Ok(Self(trimmed_name.to_owned()))
    }
}

impl AsRef<str> for ContactFullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ContactFullName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ContactFullName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
