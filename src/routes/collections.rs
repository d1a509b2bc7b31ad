use crate::configuration::ContactSettings;
use crate::contact::{inquiry_path, whatsapp_link, Category, WHATSAPP_GREETING};
use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};

/// "Customize This Suit": send the visitor to a contact form pre-filled for the product.
pub async fn customize_suit(path: web::Path<(String, String)>) -> HttpResponse {
    let (category, suit) = path.into_inner();
    let category = Category::from_param(Some(category.as_str()));
    match inquiry_path(&suit, category) {
        Ok(location) => HttpResponse::SeeOther()
            .insert_header((LOCATION, location))
            .finish(),
        Err(error) => {
            tracing::error!("Could not build inquiry link for '{}', {}.", suit, error);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn whatsapp(settings: web::Data<ContactSettings>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((
            LOCATION,
            whatsapp_link(&settings.whatsapp_number, WHATSAPP_GREETING),
        ))
        .finish()
}
