//! Checkout session.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront::checkout::{CheckoutForm, CheckoutPhase, FieldErrors};
use tracing::{info, warn};

use crate::domain::{
    checkout::errors::CheckoutError,
    orders::{OrdersGateway, PaymentHandle},
    payments::PaymentProcessor,
};

/// What a submission led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form now holds the field errors.
    Invalid(FieldErrors),

    /// The order was created and payment can now be confirmed.
    OrderCreated(PaymentHandle),

    /// Payment succeeded with the given payment id.
    PaymentSucceeded(String),

    /// The processor answered with a non-terminal status; the customer may retry.
    PaymentIncomplete(String),
}

#[derive(Debug)]
struct SessionState {
    form: CheckoutForm,
    client_secret: Option<String>,
    order: Option<PaymentHandle>,
}

/// Drives a checkout form through order creation and payment confirmation.
pub struct CheckoutSession {
    state: Mutex<SessionState>,
    orders: Arc<dyn OrdersGateway>,
    payments: Arc<dyn PaymentProcessor>,
}

impl CheckoutSession {
    pub fn new(
        form: CheckoutForm,
        orders: Arc<dyn OrdersGateway>,
        payments: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            state: Mutex::new(SessionState {
                form,
                client_secret: None,
                order: None,
            }),
            orders,
            payments,
        }
    }

    /// Supply a payment client secret issued elsewhere; the next submit confirms payment.
    pub fn set_client_secret(&self, client_secret: impl Into<String>) {
        let mut state = self.lock();

        state.client_secret = Some(client_secret.into());

        state.form.attach_payment_handle();
    }

    /// Edit the form.
    pub fn update<R>(&self, edit: impl FnOnce(&mut CheckoutForm) -> R) -> R {
        edit(&mut self.lock().form)
    }

    /// A copy of the current form state.
    pub fn form(&self) -> CheckoutForm {
        self.lock().form.clone()
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.lock().form.phase()
    }

    /// The order created by this session, if any.
    pub fn order(&self) -> Option<PaymentHandle> {
        self.lock().order.clone()
    }

    /// Validate and submit the form.
    ///
    /// Without a client secret this creates the order; with one it confirms the payment.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::SubmissionInFlight`]: another submission has not settled.
    /// - [`CheckoutError::AlreadyCompleted`]: payment already succeeded.
    /// - [`CheckoutError::Order`]: the order could not be created.
    /// - [`CheckoutError::Payment`]: the processor rejected the payment.
    pub async fn submit(&self) -> Result<SubmitOutcome, CheckoutError> {
        let (client_secret, request) = {
            let mut state = self.lock();
            let client_secret = state.client_secret.clone();

            if state
                .form
                .begin_submission(client_secret.is_some())?
                .is_none()
            {
                return Ok(SubmitOutcome::Invalid(state.form.errors().clone()));
            }

            (client_secret, state.form.order_request())
        };

        match client_secret {
            None => match self.orders.create_order(&request).await {
                Ok(handle) => {
                    let mut state = self.lock();

                    state.client_secret = Some(handle.client_secret.clone());
                    state.order = Some(handle.clone());
                    state
                        .form
                        .finish_submission(CheckoutPhase::AwaitingPaymentConfirmation);

                    Ok(SubmitOutcome::OrderCreated(handle))
                }
                Err(error) => {
                    warn!(%error, "order creation failed");
                    self.lock().form.abort_submission();

                    Err(error.into())
                }
            },
            Some(client_secret) => match self.payments.confirm_payment(&client_secret).await {
                Ok(outcome) if outcome.is_succeeded() => {
                    info!(payment_id = %outcome.id, "checkout completed");
                    self.lock().form.finish_submission(CheckoutPhase::Completed);

                    Ok(SubmitOutcome::PaymentSucceeded(outcome.id))
                }
                Ok(outcome) => {
                    info!(payment_id = %outcome.id, status = %outcome.status, "payment not completed");
                    self.lock().form.abort_submission();

                    Ok(SubmitOutcome::PaymentIncomplete(outcome.status))
                }
                Err(error) => {
                    warn!(%error, "payment confirmation failed");
                    self.lock().form.abort_submission();

                    Err(error.into())
                }
            },
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
