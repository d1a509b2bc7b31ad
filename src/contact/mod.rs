mod contact_email;
mod contact_errors;
mod contact_form_field;
mod contact_form_state;
mod contact_full_name;
mod contact_inquiry;
mod contact_message;
mod contact_phone;
mod contact_selection;
mod controller;
mod entry_parameters;
mod links;
mod notification;

pub use contact_email::ContactEmail;
pub use contact_errors::{ErrorState, ValidationError};
pub use contact_form_field::{FormField, UnknownField};
pub use contact_form_state::FormState;
pub use contact_full_name::ContactFullName;
pub use contact_inquiry::{validate, ContactInquiry};
pub use contact_message::ContactMessage;
pub use contact_phone::ContactPhone;
pub use contact_selection::{Gender, SuitType};
pub use controller::{
    ContactFormController, ContactFormView, DeliveredInquiry, PendingSubmission,
    SubmissionStatus, SubmitAttempt, DEFAULT_SUBMISSION_DELAY,
};
pub use entry_parameters::{product_inquiry_message, Category, EntryParameters};
pub use links::{inquiry_path, whatsapp_link, WHATSAPP_GREETING};
pub use notification::{
    Notification, Notifier, RecordingNotifier, TracingNotifier, INQUIRY_RECEIVED_DESCRIPTION,
    INQUIRY_RECEIVED_TITLE,
};
