use crate::contact::{FormField, ValidationError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::new(
                FormField::Gender,
                "Please select a gender",
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuitType {
    ReadyMade,
    Custom,
}

impl SuitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuitType::ReadyMade => "ready-made",
            SuitType::Custom => "custom",
        }
    }
}

impl FromStr for SuitType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready-made" => Ok(SuitType::ReadyMade),
            "custom" => Ok(SuitType::Custom),
            _ => Err(ValidationError::new(
                FormField::SuitType,
                "Please select a suit type",
            )),
        }
    }
}

impl fmt::Display for SuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
