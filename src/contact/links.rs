use crate::contact::Category;

pub const WHATSAPP_GREETING: &str =
    "Hello, I'm interested in your bespoke tailoring services. I'd like to schedule a consultation.";

#[derive(serde::Serialize)]
struct InquiryQuery<'a> {
    suit: &'a str,
    category: &'a str,
}

/// Contact page link that pre-fills the form for one product.
pub fn inquiry_path(suit: &str, category: Category) -> Result<String, serde_urlencoded::ser::Error> {
    let query = serde_urlencoded::to_string(InquiryQuery {
        suit,
        category: category.as_str(),
    })?;
    Ok(format!("/contact?{}", query))
}

/// Chat link with a pre-typed message. Spaces in `text` become `%20`.
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
}
