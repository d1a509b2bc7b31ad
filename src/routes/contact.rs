use crate::configuration::ContactSettings;
use crate::contact::{
    ContactFormController, ContactFormView, EntryParameters, FormField, Notification, Notifier,
    RecordingNotifier, SubmissionStatus, TracingNotifier,
};
use actix_web::{web, HttpResponse};
use std::sync::Arc;

/// Urlencoded body of the contact form. Absent inputs keep their initial value.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub suit_type: Option<String>,
    pub message: Option<String>,
}

impl ContactFormData {
    fn into_fields(self) -> impl Iterator<Item = (FormField, String)> {
        [
            (FormField::FullName, self.full_name),
            (FormField::Phone, self.phone),
            (FormField::Email, self.email),
            (FormField::Gender, self.gender),
            (FormField::SuitType, self.suit_type),
            (FormField::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
    }
}

#[derive(serde::Serialize)]
struct ContactFormResponse<'a> {
    #[serde(flatten)]
    view: ContactFormView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<Notification>,
}

#[tracing::instrument(
    name = "Rendering contact form",
    skip(query, settings),
    fields(suit = ?query.suit, category = ?query.category)
)]
pub async fn contact_form(
    query: web::Query<EntryParameters>,
    settings: web::Data<ContactSettings>,
) -> HttpResponse {
    let controller =
        ContactFormController::initialize(&query, settings.submission_delay(), TracingNotifier);
    HttpResponse::Ok().json(controller.view())
}

#[tracing::instrument(
    name = "Receiving contact inquiry",
    skip(query, form, settings),
    fields(suit = ?query.suit, category = ?query.category)
)]
pub async fn submit_contact_form(
    query: web::Query<EntryParameters>,
    form: web::Form<ContactFormData>,
    settings: web::Data<ContactSettings>,
) -> HttpResponse {
    let notifier = Arc::new(RecordingNotifier::new());
    let mut controller = ContactFormController::initialize(
        &query,
        settings.submission_delay(),
        Arc::clone(&notifier),
    );
    for (field, value) in form.into_inner().into_fields() {
        controller.update_field(field, value);
    }
    match controller.submit_and_wait().await {
        SubmissionStatus::Submitted => {
            let notification = notifier.take().into_iter().next();
            if let Some(notification) = &notification {
                TracingNotifier.notify(notification.clone());
            }
            HttpResponse::Ok().json(ContactFormResponse {
                view: controller.view(),
                notification,
            })
        }
        status => {
            tracing::debug!(?status, errors = ?controller.errors(), "Returning field errors");
            HttpResponse::BadRequest().json(ContactFormResponse {
                view: controller.view(),
                notification: None,
            })
        }
    }
}
