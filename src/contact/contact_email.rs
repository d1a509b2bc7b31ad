use crate::contact::{FormField, ValidationError};
use regex::Regex;
use std::convert::AsRef;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const EMAIL_MAX_CHARS: usize = 255;

// Same shape as zod's `.email()`: letters, digits and `_'+-.` before the `@`,
// dotted domain labels, alphabetic top-level domain of two or more letters.
// No leading dot and no `..` anywhere; `regex` has no look-around, so those
// two are checked by hand in `is_well_formed`.
static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email expression is valid")
});

fn is_well_formed(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_FORMAT.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        Self::parse(email)
    }
    /// Length wins over syntax: an overlong address is always reported as too long.
    pub fn parse(email: &str) -> Result<Self, ValidationError> {
        let trimmed_email = email.trim();
        if trimmed_email.chars().count() > EMAIL_MAX_CHARS {
            return Err(ValidationError::new(FormField::Email, "Email is too long"));
        }
        if is_well_formed(trimmed_email) {
            Ok(Self(trimmed_email.to_owned()))
        } else {
            Err(ValidationError::new(
                FormField::Email,
                "Please enter a valid email address",
            ))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ContactEmail {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
