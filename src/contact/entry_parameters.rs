use crate::contact::{FormState, Gender};

/// Collection a product was browsed from. Anything but `women` is men's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Men,
    Women,
}

impl Category {
    pub fn from_param(category: Option<&str>) -> Self {
        match category {
            Some("women") => Category::Women,
            _ => Category::Men,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
        }
    }

    pub fn possessive(&self) -> &'static str {
        match self {
            Category::Men => "men's",
            Category::Women => "women's",
        }
    }

    pub fn gender(&self) -> Gender {
        match self {
            Category::Men => Gender::Male,
            Category::Women => Gender::Female,
        }
    }
}

/// Query parameters the contact page is entered with, e.g. from a collection card.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct EntryParameters {
    pub suit: Option<String>,
    pub category: Option<String>,
}

impl EntryParameters {
    pub fn category(&self) -> Category {
        Category::from_param(self.category.as_deref())
    }

    /// Default form, pre-filled when a product name was passed along.
    pub fn initial_form(&self) -> FormState {
        let mut form = FormState::default();
        if let Some(suit) = self.suit.as_deref().filter(|suit| !suit.is_empty()) {
            let category = self.category();
            form.message = product_inquiry_message(suit, category);
            form.gender = category.gender().as_str().to_owned();
        }
        form
    }
}

pub fn product_inquiry_message(suit: &str, category: Category) -> String {
    format!(
        "I'm interested in the \"{}\" suit from your {} collection. Please provide more information about customization options.",
        suit,
        category.possessive()
    )
}
