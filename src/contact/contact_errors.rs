use crate::contact::FormField;
use std::collections::BTreeMap;
use std::fmt;

/// A single rule violation, scoped to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Messages from the most recent validation pass, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ErrorState(BTreeMap<FormField, String>);

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field, error.message.to_owned());
    }

    /// Returns whether an entry existed for `field`.
    pub fn clear_field(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<ValidationError> for ErrorState {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = ErrorState::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}
