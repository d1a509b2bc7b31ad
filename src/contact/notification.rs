use std::sync::{Arc, Mutex};

pub const INQUIRY_RECEIVED_TITLE: &str = "Inquiry Received";
pub const INQUIRY_RECEIVED_DESCRIPTION: &str =
    "Thank you! We'll contact you within 24 hours to schedule your consultation.";

/// Transient message shown to the visitor; display and dismissal belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn inquiry_received() -> Self {
        Self {
            title: INQUIRY_RECEIVED_TITLE.to_owned(),
            description: INQUIRY_RECEIVED_DESCRIPTION.to_owned(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Emits notifications as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "Notification emitted"
        );
    }
}

/// Keeps every notification so it can be handed back to the client.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    recorded: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Notification> {
        match self.recorded.lock() {
            Ok(mut recorded) => std::mem::take(&mut *recorded),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        match self.recorded.lock() {
            Ok(recorded) => recorded.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "Recording notification");
        match self.recorded.lock() {
            Ok(mut recorded) => recorded.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}
