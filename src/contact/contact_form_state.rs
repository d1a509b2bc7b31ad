use crate::contact::{FormField, Gender, SuitType};

/// Raw text behind every input of the contact form.
///
/// Selections are kept as the submitted option value so that an
/// out-of-range choice surfaces as a validation message instead of
/// being rejected before the schema sees it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub gender: String,
    pub suit_type: String,
    pub message: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            gender: Gender::Male.as_str().to_owned(),
            suit_type: SuitType::Custom.as_str().to_owned(),
            message: String::new(),
        }
    }
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.full_name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Gender => &self.gender,
            FormField::SuitType => &self.suit_type,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Gender => &mut self.gender,
            FormField::SuitType => &mut self.suit_type,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::FormState;
    use crate::contact::FormField;

    #[test]
    fn defaults_select_male_and_custom() {
        let form = FormState::default();
        assert_eq!(form.get(FormField::Gender), "male");
        assert_eq!(form.get(FormField::SuitType), "custom");
        assert_eq!(form.get(FormField::FullName), "");
        assert_eq!(form.get(FormField::Message), "");
    }

    #[test]
    fn set_writes_only_the_named_field() {
        let mut form = FormState::default();
        form.set(FormField::Phone, "+44 20 7123 4567".to_owned());
        assert_eq!(form.phone, "+44 20 7123 4567");
        assert_eq!(form.email, "");
    }
}
