use crate::contact::{
    ContactEmail, ContactFullName, ContactMessage, ContactPhone, ErrorState, FormState, Gender,
    SuitType, ValidationError,
};

/// A contact form that passed every rule of the schema.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub full_name: ContactFullName,
    pub phone: ContactPhone,
    pub email: ContactEmail,
    pub gender: Gender,
    pub suit_type: SuitType,
    pub message: Option<ContactMessage>,
}

fn keep<T>(result: Result<T, ValidationError>, errors: &mut ErrorState) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(error);
            None
        }
    }
}

/// Check every field of `form`, collecting one message per failing field.
pub fn validate(form: &FormState) -> Result<ContactInquiry, ErrorState> {
    let mut errors = ErrorState::new();
    let full_name = keep(ContactFullName::parse(&form.full_name), &mut errors);
    let phone = keep(ContactPhone::parse(&form.phone), &mut errors);
    let email = keep(ContactEmail::parse(&form.email), &mut errors);
    let gender = keep(form.gender.parse::<Gender>(), &mut errors);
    let suit_type = keep(form.suit_type.parse::<SuitType>(), &mut errors);
    let message = keep(ContactMessage::parse(&form.message), &mut errors);
    match (full_name, phone, email, gender, suit_type, message) {
        (Some(full_name), Some(phone), Some(email), Some(gender), Some(suit_type), Some(message)) => {
            Ok(ContactInquiry {
                full_name,
                phone,
                email,
                gender,
                suit_type,
                message,
            })
        }
        _ => Err(errors),
    }
}
