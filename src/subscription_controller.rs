use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

use crate::domain::{FormState, SubscriptionRequest};
use crate::subscribe_client::SubscribeClient;

pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// The UI surface the controller drives: the subscribe form fields,
/// blocking notifications and the modal that hosts the form.
pub trait SubscribeView {
    fn read_form(&self) -> FormState;
    fn write_form(&self, state: FormState);
    /// Blocks until the user has seen the message.
    fn notify(&self, message: &str);
    fn hide_modal(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the subscription. The form was reset and the modal closed.
    Subscribed,
    /// The server refused the subscription. The form is left as typed.
    Rejected,
    /// The request or the response parsing failed.
    Failed,
    /// Another submission was still waiting for its response.
    AlreadyInFlight,
}

pub struct SubscriptionController<V> {
    client: SubscribeClient,
    view: V,
    in_flight: AtomicBool,
}

impl<V: SubscribeView> SubscriptionController<V> {
    pub fn new(client: SubscribeClient, view: V) -> Self {
        Self {
            client,
            view,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    #[tracing::instrument(
        name = "Submitting the subscribe form",
        skip(self),
        fields(
            submission_id = %Uuid::new_v4(),
            subscriber_email = tracing::field::Empty,
        )
    )]
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::warn!("A subscription is already in flight, ignoring the submit");
            return SubmitOutcome::AlreadyInFlight;
        };

        let form = self.view.read_form();
        tracing::Span::current().record("subscriber_email", tracing::field::display(&form.email));
        let request = SubscriptionRequest::from(form);

        match self.client.subscribe(&request).await {
            Ok(response) => {
                self.view.notify(&response.message);
                if response.success {
                    self.view.write_form(FormState::default());
                    self.view.hide_modal();
                    tracing::info!("Subscription accepted");
                    SubmitOutcome::Subscribed
                } else {
                    tracing::info!(reason = %response.message, "Subscription refused");
                    SubmitOutcome::Rejected
                }
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to submit the subscription"
                );
                self.view.notify(GENERIC_FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Clears the in-flight flag on drop, including when the submit future is cancelled.
#[derive(Debug)]
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
