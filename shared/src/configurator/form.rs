//! Lead form and submission flow
//!
//! The form wraps a [`Selection`] with the contact block, the cookie
//! consent flag and a busy flag. Submitting goes through two collaborators:
//! [`CurrentUserProvider`] answers who is signed in, [`OrderSubmitter`]
//! persists the order. Neither is global state; both are passed in.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use super::Selection;
use crate::models::{ContactDetails, Order, OrderDetails};

/// Opaque failure of the order-submission collaborator
#[derive(Debug, Clone, Error)]
#[error("order submission failed: {reason}")]
pub struct SubmitError {
    reason: String,
}

impl SubmitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Caller-side validation and submission errors
#[derive(Debug, Clone, Error)]
pub enum FormError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("cookie consent is required")]
    ConsentRequired,

    #[error("name and phone are required")]
    ContactRequired,

    #[error("custom wood must be specified")]
    CustomWoodRequired,

    #[error("sign in to place an order")]
    NotAuthenticated,

    #[error("order could not be submitted")]
    SubmissionFailed(#[source] SubmitError),
}

/// Persists an order for a user
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, user_id: &str, details: OrderDetails) -> Result<Order, SubmitError>;
}

/// Who is signed in right now
pub trait CurrentUserProvider: Send + Sync {
    fn current_user(&self) -> Option<String>;

    /// Receiver notified on every sign-in / sign-out
    fn subscribe(&self) -> watch::Receiver<Option<String>>;
}

/// Session state backed by a watch channel
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Arc<watch::Sender<Option<String>>>,
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        self.tx.send_replace(Some(user_id.into()));
    }

    pub fn sign_out(&self) {
        self.tx.send_replace(None);
    }
}

impl CurrentUserProvider for SessionHandle {
    fn current_user(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}

/// Validated submission, ready for the collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub user_id: String,
    pub details: OrderDetails,
}

/// Configurator lead form
#[derive(Debug, Clone)]
pub struct OrderForm {
    selection: Selection,
    contact: ContactDetails,
    consent: bool,
    submitting: bool,
}

impl OrderForm {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            contact: ContactDetails::new("", ""),
            consent: false,
            submitting: false,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.contact.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.contact.phone = phone.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.contact.comment = comment.into();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and mark the form busy
    ///
    /// Checks run in a fixed order; the first failing one is reported.
    pub fn begin_submission(
        &mut self,
        user_id: Option<String>,
    ) -> Result<PendingSubmission, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }
        if !self.consent {
            return Err(FormError::ConsentRequired);
        }
        if self.contact.name.trim().is_empty() || self.contact.phone.trim().is_empty() {
            return Err(FormError::ContactRequired);
        }
        if self.selection.material().is_custom
            && self.selection.configuration().custom_wood.trim().is_empty()
        {
            return Err(FormError::CustomWoodRequired);
        }
        let user_id = user_id.ok_or(FormError::NotAuthenticated)?;

        self.submitting = true;
        Ok(PendingSubmission {
            user_id,
            details: OrderDetails {
                contact: self.contact.clone(),
                configuration: self.selection.order_payload(),
            },
        })
    }

    /// Clear the busy flag; a successful submission resets the contact block
    pub fn finish_submission(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.contact = ContactDetails::new("", "");
        }
    }

    /// Validate, submit once, and settle the form
    pub async fn submit(
        &mut self,
        submitter: &dyn OrderSubmitter,
        users: &dyn CurrentUserProvider,
    ) -> Result<Order, FormError> {
        let pending = self.begin_submission(users.current_user())?;

        let result = submitter.submit(&pending.user_id, pending.details).await;
        self.finish_submission(result.is_ok());

        result.map_err(|e| {
            tracing::warn!(user_id = %pending.user_id, reason = %e.reason(), "Order submission failed");
            FormError::SubmissionFailed(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::configurator::ConfigUpdate;
    use crate::models::OrderStatus;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSubmitter {
        fail: bool,
        calls: Mutex<Vec<(String, OrderDetails)>>,
    }

    #[async_trait]
    impl OrderSubmitter for RecordingSubmitter {
        async fn submit(&self, user_id: &str, details: OrderDetails) -> Result<Order, SubmitError> {
            self.calls
                .lock()
                .unwrap()
                .push((user_id.to_string(), details.clone()));
            if self.fail {
                return Err(SubmitError::new("store offline"));
            }
            Ok(Order::new_request("o1", user_id, details))
        }
    }

    fn form() -> OrderForm {
        OrderForm::new(Selection::new(Arc::new(Catalog::standard())))
    }

    fn filled_form() -> OrderForm {
        let mut form = form();
        form.set_consent(true);
        form.set_name("Анна");
        form.set_phone("+7 900 123-45-67");
        form
    }

    #[test]
    fn test_validation_order() {
        let mut form = form();
        form.selection_mut().set_material("custom").unwrap();

        assert!(matches!(
            form.begin_submission(None),
            Err(FormError::ConsentRequired)
        ));
        form.set_consent(true);
        assert!(matches!(
            form.begin_submission(None),
            Err(FormError::ContactRequired)
        ));
        form.set_name("Анна");
        form.set_phone("   ");
        assert!(matches!(
            form.begin_submission(None),
            Err(FormError::ContactRequired)
        ));
        form.set_phone("+7 900 123-45-67");
        assert!(matches!(
            form.begin_submission(None),
            Err(FormError::CustomWoodRequired)
        ));
        form.selection_mut()
            .update_configuration(ConfigUpdate::CustomWood("Венге".to_string()));
        assert!(matches!(
            form.begin_submission(None),
            Err(FormError::NotAuthenticated)
        ));
        assert!(!form.is_submitting());

        let pending = form.begin_submission(Some("u1".to_string())).unwrap();
        assert!(form.is_submitting());
        assert_eq!(pending.user_id, "u1");
        assert_eq!(pending.details.configuration.wood, "Венге");
        assert_eq!(pending.details.contact.contact_method, "request");
    }

    #[test]
    fn test_busy_flag_blocks_second_submission() {
        let mut form = filled_form();
        form.begin_submission(Some("u1".to_string())).unwrap();
        assert!(matches!(
            form.begin_submission(Some("u1".to_string())),
            Err(FormError::AlreadySubmitting)
        ));

        form.finish_submission(false);
        assert!(!form.is_submitting());
        assert_eq!(form.contact().name, "Анна");
    }

    #[tokio::test]
    async fn test_submit_success_resets_contact_only() {
        let submitter = RecordingSubmitter::default();
        let session = SessionHandle::new();
        session.sign_in("u1");

        let mut form = filled_form();
        form.set_comment("К юбилею");
        form.selection_mut().set_finish("l_brown").unwrap();
        form.selection_mut()
            .update_configuration(ConfigUpdate::Lodgement(true));

        let order = form.submit(&submitter, &session).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.details.contact.comment, "К юбилею");
        assert_eq!(order.details.configuration.finish, "Коричневая Кожа");

        assert!(!form.is_submitting());
        assert!(form.contact().name.is_empty());
        assert!(form.contact().phone.is_empty());
        assert!(form.contact().comment.is_empty());
        assert_eq!(form.selection().finish().id, "l_brown");
        assert!(form.selection().configuration().lodgement);
        assert_eq!(submitter.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_is_opaque_and_not_retried() {
        let submitter = RecordingSubmitter {
            fail: true,
            ..Default::default()
        };
        let session = SessionHandle::new();
        session.sign_in("u1");

        let mut form = filled_form();
        let err = form.submit(&submitter, &session).await.unwrap_err();

        assert!(matches!(err, FormError::SubmissionFailed(_)));
        assert_eq!(submitter.calls.lock().unwrap().len(), 1);
        assert!(!form.is_submitting());
        assert_eq!(form.contact().name, "Анна");
    }

    #[tokio::test]
    async fn test_submit_requires_session() {
        let submitter = RecordingSubmitter::default();
        let session = SessionHandle::new();

        let mut form = filled_form();
        let err = form.submit(&submitter, &session).await.unwrap_err();
        assert!(matches!(err, FormError::NotAuthenticated));
        assert!(submitter.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_notifies_subscribers() {
        let session = SessionHandle::new();
        let mut rx = session.subscribe();
        assert_eq!(session.current_user(), None);

        session.sign_in("u42");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_deref(), Some("u42"));

        session.sign_out();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_none());
        assert_eq!(session.current_user(), None);
    }
}
