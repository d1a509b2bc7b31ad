mod collections;
mod contact;
mod healthcheck;

pub use collections::{customize_suit, whatsapp};
pub use contact::{contact_form, submit_contact_form, ContactFormData};
pub use healthcheck::{healthcheck, HealthcheckObject};
