use std::fmt;
use std::str::FromStr;

/// Every input backing the contact form, named as they travel over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Phone,
    Email,
    Gender,
    SuitType,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::FullName,
        FormField::Phone,
        FormField::Email,
        FormField::Gender,
        FormField::SuitType,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Gender => "gender",
            FormField::SuitType => "suitType",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}' is not part of the contact form.", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}
