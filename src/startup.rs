use crate::configuration::ContactSettings;
use crate::routes::{contact_form, customize_suit, healthcheck, submit_contact_form, whatsapp};
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, contact_settings: ContactSettings) -> Result<Server, std::io::Error> {
    let contact_settings = web::Data::new(contact_settings);
    let server = HttpServer::new(move || {
        App::new()
            // Request spans
            .wrap(TracingLogger::default())
            // Ensure App to be running correctly
            .route("/healthcheck", web::get().to(healthcheck))
            // Contact form, optionally pre-filled from a product
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_contact_form))
            // Product cards link here to start an inquiry
            .route(
                "/collections/{category}/{suit}",
                web::get().to(customize_suit),
            )
            .route("/whatsapp", web::get().to(whatsapp))
            .app_data(contact_settings.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
