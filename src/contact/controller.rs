use crate::contact::{
    validate, ContactInquiry, EntryParameters, ErrorState, FormField, FormState, Notification,
    Notifier, UnknownField,
};
use futures::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Sleep;
use uuid::Uuid;

pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
}

/// Outcome of pressing submit.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// A submission is in flight or already done; nothing happened.
    Ignored,
    /// The form failed validation; see `ContactFormController::errors`.
    Rejected,
    /// The form is valid and the simulated round-trip has started.
    Pending(PendingSubmission),
}

/// Simulated network latency for an accepted inquiry.
///
/// Resolves once the delay elapses. Dropping it abandons the timer and
/// leaves the controller in `Submitting`.
#[derive(Debug)]
pub struct PendingSubmission {
    inquiry_id: Uuid,
    inquiry: ContactInquiry,
    delay: Pin<Box<Sleep>>,
}

impl Future for PendingSubmission {
    type Output = DeliveredInquiry;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        futures::ready!(this.delay.poll_unpin(cx));
        Poll::Ready(DeliveredInquiry {
            inquiry_id: this.inquiry_id,
            inquiry: this.inquiry.clone(),
        })
    }
}

/// Proof that the simulated round-trip finished.
#[derive(Debug, Clone)]
pub struct DeliveredInquiry {
    pub inquiry_id: Uuid,
    pub inquiry: ContactInquiry,
}

/// Snapshot handed to whatever renders the form.
#[derive(Debug, serde::Serialize)]
pub struct ContactFormView<'a> {
    pub status: SubmissionStatus,
    pub form: &'a FormState,
    pub errors: &'a ErrorState,
}

/// Owns the state of one visit to the contact page.
#[derive(Debug)]
pub struct ContactFormController<N> {
    form: FormState,
    errors: ErrorState,
    status: SubmissionStatus,
    submission_delay: Duration,
    notifier: N,
}

impl<N: Notifier> ContactFormController<N> {
    pub fn initialize(entry: &EntryParameters, submission_delay: Duration, notifier: N) -> Self {
        Self {
            form: entry.initial_form(),
            errors: ErrorState::new(),
            status: SubmissionStatus::Idle,
            submission_delay,
            notifier,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn view(&self) -> ContactFormView<'_> {
        ContactFormView {
            status: self.status,
            form: &self.form,
            errors: &self.errors,
        }
    }

    /// Overwrite one field and drop its error, if any. The field is not
    /// re-validated until the next submit. Returns `false` once the form is
    /// no longer editable.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.status != SubmissionStatus::Idle {
            tracing::debug!(%field, status = ?self.status, "Ignoring edit of locked form");
            return false;
        }
        self.form.set(field, value.into());
        self.errors.clear_field(field);
        true
    }

    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<bool, UnknownField> {
        let field: FormField = name.parse()?;
        Ok(self.update_field(field, value))
    }

    #[tracing::instrument(name = "Submitting contact form", skip(self))]
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.status != SubmissionStatus::Idle {
            tracing::debug!(status = ?self.status, "Ignoring repeated submit");
            return SubmitAttempt::Ignored;
        }
        self.status = SubmissionStatus::Submitting;
        self.errors.clear();
        match validate(&self.form) {
            Ok(inquiry) => {
                let inquiry_id = Uuid::now_v7();
                tracing::info!(%inquiry_id, "Contact form passed validation");
                SubmitAttempt::Pending(PendingSubmission {
                    inquiry_id,
                    inquiry,
                    delay: Box::pin(tokio::time::sleep(self.submission_delay)),
                })
            }
            Err(errors) => {
                tracing::info!(
                    failing_fields = errors.len(),
                    "Contact form failed validation"
                );
                self.errors = errors;
                self.status = SubmissionStatus::Idle;
                SubmitAttempt::Rejected
            }
        }
    }

    /// Finish a submission once its simulated round-trip resolved.
    pub fn complete(&mut self, delivered: DeliveredInquiry) {
        if self.status != SubmissionStatus::Submitting {
            tracing::warn!(
                inquiry_id = %delivered.inquiry_id,
                status = ?self.status,
                "Discarding delivery for a form that is not submitting"
            );
            return;
        }
        self.status = SubmissionStatus::Submitted;
        let inquiry = &delivered.inquiry;
        tracing::info!(
            inquiry_id = %delivered.inquiry_id,
            gender = %inquiry.gender,
            suit_type = %inquiry.suit_type,
            "Contact inquiry submitted"
        );
        tracing::debug!(
            inquiry_id = %delivered.inquiry_id,
            full_name = %inquiry.full_name,
            phone = %inquiry.phone,
            email = %inquiry.email,
            message = ?inquiry.message.as_ref().map(AsRef::<str>::as_ref),
            "Contact inquiry details"
        );
        self.notifier.notify(Notification::inquiry_received());
    }

    pub async fn submit_and_wait(&mut self) -> SubmissionStatus {
        if let SubmitAttempt::Pending(pending) = self.submit() {
            let delivered = pending.await;
            self.complete(delivered);
        }
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactFormController, SubmissionStatus, SubmitAttempt, DEFAULT_SUBMISSION_DELAY};
    use crate::contact::{EntryParameters, FormField, RecordingNotifier, SuitType};
    use claims::{assert_matches, assert_none, assert_ok, assert_some_eq};
    use std::sync::Arc;
    use std::time::Duration;

    fn controller(entry: EntryParameters) -> ContactFormController<Arc<RecordingNotifier>> {
        ContactFormController::initialize(
            &entry,
            DEFAULT_SUBMISSION_DELAY,
            Arc::new(RecordingNotifier::new()),
        )
    }

    fn fill_valid(controller: &mut ContactFormController<Arc<RecordingNotifier>>) {
        controller.update_field(FormField::FullName, "Jane Doe");
        controller.update_field(FormField::Phone, "+44 20 7123 4567");
        controller.update_field(FormField::Email, "jane@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn valid_form_reaches_submitted_after_delay() {
        let mut controller = controller(EntryParameters::default());
        fill_valid(&mut controller);
        let pending = match controller.submit() {
            SubmitAttempt::Pending(pending) => pending,
            other => panic!("Expected pending submission, got {:?}", other),
        };
        assert_eq!(controller.status(), SubmissionStatus::Submitting);
        let started = tokio::time::Instant::now();
        let delivered = pending.await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
        controller.complete(delivered);
        assert_eq!(controller.status(), SubmissionStatus::Submitted);
        assert!(controller.errors().is_empty());
        let notifications = controller.notifier().take();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Inquiry Received");
    }

    #[tokio::test(start_paused = true)]
    async fn delivered_inquiry_carries_validated_values() {
        let mut controller = controller(EntryParameters::default());
        fill_valid(&mut controller);
        controller.update_field(FormField::Email, "  jane@example.com  ");
        controller.update_field(FormField::SuitType, "ready-made");
        let SubmitAttempt::Pending(pending) = controller.submit() else {
            panic!("Expected pending submission");
        };
        let delivered = pending.await;
        assert_eq!(delivered.inquiry.email.as_ref(), "jane@example.com");
        assert_eq!(delivered.inquiry.suit_type, SuitType::ReadyMade);
        assert!(delivered.inquiry.message.is_none());
        controller.complete(delivered);
        assert_eq!(controller.status(), SubmissionStatus::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_while_submitting_is_ignored() {
        let mut controller = controller(EntryParameters::default());
        fill_valid(&mut controller);
        let first = controller.submit();
        assert_matches!(controller.submit(), SubmitAttempt::Ignored);
        let SubmitAttempt::Pending(pending) = first else {
            panic!("Expected first submit to be pending");
        };
        controller.complete(pending.await);
        assert_matches!(controller.submit(), SubmitAttempt::Ignored);
        assert_eq!(controller.status(), SubmissionStatus::Submitted);
        assert_eq!(controller.notifier().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn short_name_returns_to_idle_with_single_error() {
        let mut controller = controller(EntryParameters::default());
        fill_valid(&mut controller);
        controller.update_field(FormField::FullName, "J");
        let status = controller.submit_and_wait().await;
        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(controller.errors().len(), 1);
        assert_some_eq!(
            controller.errors().get(FormField::FullName),
            "Name must be at least 2 characters"
        );
        assert!(controller.notifier().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn editing_a_field_clears_only_its_error() {
        let mut controller = controller(EntryParameters::default());
        assert_matches!(controller.submit(), SubmitAttempt::Rejected);
        assert_eq!(controller.errors().len(), 3);
        controller.update_field(FormField::Phone, "1");
        assert_none!(controller.errors().get(FormField::Phone));
        assert!(controller.errors().contains(FormField::FullName));
        assert!(controller.errors().contains(FormField::Email));
    }

    #[tokio::test(start_paused = true)]
    async fn resubmitting_replaces_previous_errors() {
        let mut controller = controller(EntryParameters::default());
        controller.submit_and_wait().await;
        fill_valid(&mut controller);
        controller.update_field(FormField::Email, "not-an-email");
        controller.submit_and_wait().await;
        let fields: Vec<FormField> = controller.errors().iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![FormField::Email]);
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_form_keeps_entered_values() {
        let entry = EntryParameters {
            suit: Some("The Executive".to_owned()),
            category: Some("women".to_owned()),
        };
        let mut controller = controller(entry);
        fill_valid(&mut controller);
        controller.update_field(FormField::FullName, "  Jane Doe  ");
        let before = controller.form().clone();
        let SubmitAttempt::Pending(pending) = controller.submit() else {
            panic!("Expected pending submission");
        };
        assert!(!controller.update_field(FormField::FullName, "Someone Else"));
        controller.complete(pending.await);
        assert_eq!(controller.form(), &before);
        assert_eq!(controller.form().full_name, "  Jane Doe  ");
        assert_eq!(controller.form().gender, "female");
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_field_names_are_rejected() {
        let mut controller = controller(EntryParameters::default());
        assert!(controller.update_field_by_name("shoeSize", "42").is_err());
        assert_ok!(controller.update_field_by_name("suitType", "ready-made"));
        assert_eq!(controller.form().suit_type, "ready-made");
    }

    #[tokio::test(start_paused = true)]
    async fn view_reports_current_state() {
        let mut controller = controller(EntryParameters::default());
        controller.update_field(FormField::Gender, "other");
        controller.submit_and_wait().await;
        let view = serde_json::to_value(controller.view()).unwrap();
        assert_eq!(view["status"], "idle");
        assert_eq!(view["form"]["suitType"], "custom");
        assert_eq!(view["errors"]["gender"], "Please select a gender");
    }
}
