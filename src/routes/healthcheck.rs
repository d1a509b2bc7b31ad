use actix_web::{HttpResponse, Responder};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

// Healthcheck response format for HTTP APIs https://inadarei.github.io/rfc-healthcheck/
#[derive(serde::Serialize)]
pub struct HealthcheckObject {
    pub status: String,
    pub output: String,
    pub time: String,
    pub version: String,
}

pub async fn healthcheck() -> impl Responder {
    let now_string = match OffsetDateTime::now_utc().format(&Rfc3339) {
        Ok(now) => now,
        Err(error) => {
            tracing::error!("Could not format healthcheck time, {}.", error);
            String::new()
        }
    };
    HttpResponse::Ok().json(HealthcheckObject {
        status: "pass".to_owned(),
        output: String::new(),
        time: now_string,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
