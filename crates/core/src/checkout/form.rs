//! Checkout Form
//!
//! Transient form state for a single checkout. Nothing here is persisted.

use thiserror::Error;

use crate::checkout::{
    address::{Address, AddressField, Country},
    request::OrderRequest,
    validation::{FieldErrors, ValidationInput, validate},
};

/// Errors raised when a submission cannot start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already running.
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// The payment has already succeeded.
    #[error("checkout is already complete")]
    AlreadyCompleted,
}

/// What a running submission is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    /// Creating the order and payment intent.
    CreateOrder,

    /// Confirming payment with the processor.
    ConfirmPayment,
}

/// Where the checkout is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Customer is filling in the form.
    #[default]
    Editing,

    /// A submission is in flight.
    Submitting(SubmissionKind),

    /// An order exists and a payment handle is available.
    AwaitingPaymentConfirmation,

    /// Payment succeeded.
    Completed,
}

/// Details of a signed-in customer used to prefill the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerProfile {
    /// Account email
    pub email: Option<String>,

    /// Full name
    pub name: Option<String>,

    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,
}

/// Checkout form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutForm {
    customer_email: String,
    customer_name: String,
    customer_phone: String,
    shipping: Address,
    billing: Address,
    same_as_shipping: bool,
    errors: FieldErrors,
    phase: CheckoutPhase,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            customer_email: String::new(),
            customer_name: String::new(),
            customer_phone: String::new(),
            shipping: Address::new(Country::GB),
            billing: Address::new(Country::GB),
            same_as_shipping: true,
            errors: FieldErrors::new(),
            phase: CheckoutPhase::Editing,
        }
    }
}

impl CheckoutForm {
    /// An empty form shipping to the UK with billing same as shipping.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form prefilled from a signed-in customer's profile.
    pub fn for_customer(profile: &CustomerProfile) -> Self {
        let mut form = Self::new();

        form.customer_email = profile.email.clone().unwrap_or_default();
        form.customer_name = profile.name.clone().unwrap_or_default();

        for address in [&mut form.shipping, &mut form.billing] {
            address.first_name = profile.first_name.clone().unwrap_or_default();
            address.last_name = profile.last_name.clone().unwrap_or_default();
        }

        form
    }

    /// Contact email
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Contact name
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Contact phone
    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    /// Shipping address
    pub fn shipping(&self) -> &Address {
        &self.shipping
    }

    /// Billing address as entered (ignored while `same_as_shipping` is set)
    pub fn billing(&self) -> &Address {
        &self.billing
    }

    /// Whether the billing address mirrors the shipping address.
    pub fn same_as_shipping(&self) -> bool {
        self.same_as_shipping
    }

    /// Errors from the last validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Whether a submission is running.
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, CheckoutPhase::Submitting(_))
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.phase,
            CheckoutPhase::Submitting(_) | CheckoutPhase::Completed
        )
    }

    /// Submit button text for the current phase.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            CheckoutPhase::Editing => "Continue to Payment",
            CheckoutPhase::Submitting(SubmissionKind::CreateOrder) => "Preparing Checkout...",
            CheckoutPhase::Submitting(SubmissionKind::ConfirmPayment) => "Processing Payment...",
            CheckoutPhase::AwaitingPaymentConfirmation => "Complete Order",
            CheckoutPhase::Completed => "Order Complete",
        }
    }

    /// Set the contact email.
    pub fn set_customer_email(&mut self, value: impl Into<String>) {
        self.customer_email = value.into();
    }

    /// Set the contact name.
    pub fn set_customer_name(&mut self, value: impl Into<String>) {
        self.customer_name = value.into();
    }

    /// Set the contact phone.
    pub fn set_customer_phone(&mut self, value: impl Into<String>) {
        self.customer_phone = value.into();
    }

    /// Update one shipping address field.
    pub fn update_shipping(&mut self, field: AddressField, value: impl Into<String>) {
        self.shipping.set(field, value);
    }

    /// Update one billing address field.
    pub fn update_billing(&mut self, field: AddressField, value: impl Into<String>) {
        self.billing.set(field, value);
    }

    /// Choose the shipping country.
    pub fn select_shipping_country(&mut self, country: Country) {
        self.shipping.country = country.code().to_string();
    }

    /// Choose the billing country.
    pub fn select_billing_country(&mut self, country: Country) {
        self.billing.country = country.code().to_string();
    }

    /// Replace the shipping address wholesale, e.g. from saved customer details.
    pub fn set_shipping_address(&mut self, address: Address) {
        self.shipping = address;
    }

    /// Replace the billing address wholesale.
    pub fn set_billing_address(&mut self, address: Address) {
        self.billing = address;
    }

    /// Toggle whether billing mirrors shipping.
    pub fn set_same_as_shipping(&mut self, same: bool) {
        self.same_as_shipping = same;
    }

    /// Recompute all field errors, replacing any from a previous pass.
    ///
    /// Returns `true` when there are no errors.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(ValidationInput {
            customer_email: &self.customer_email,
            customer_name: &self.customer_name,
            shipping: &self.shipping,
            billing: (!self.same_as_shipping).then_some(&self.billing),
        });

        self.errors.is_empty()
    }

    /// The billing address that will be submitted.
    pub fn effective_billing(&self) -> &Address {
        if self.same_as_shipping {
            &self.shipping
        } else {
            &self.billing
        }
    }

    /// Build the order payload from the current field values.
    pub fn order_request(&self) -> OrderRequest {
        let phone = self.customer_phone.trim();

        OrderRequest {
            customer_email: self.customer_email.clone(),
            customer_name: self.customer_name.clone(),
            customer_phone: (!phone.is_empty()).then(|| phone.to_string()),
            shipping_address: self.shipping.clone(),
            billing_address: self.effective_billing().clone(),
        }
    }

    /// Validate and, if valid, enter the submitting phase.
    ///
    /// Returns `Ok(None)` when validation fails; the phase is left untouched and the errors are
    /// available from [`CheckoutForm::errors`].
    ///
    /// # Errors
    ///
    /// - [`FormError::SubmissionInFlight`]: a previous submission has not settled.
    /// - [`FormError::AlreadyCompleted`]: payment already succeeded.
    pub fn begin_submission(
        &mut self,
        has_payment_handle: bool,
    ) -> Result<Option<SubmissionKind>, FormError> {
        match self.phase {
            CheckoutPhase::Submitting(_) => return Err(FormError::SubmissionInFlight),
            CheckoutPhase::Completed => return Err(FormError::AlreadyCompleted),
            CheckoutPhase::Editing | CheckoutPhase::AwaitingPaymentConfirmation => {}
        }

        if !self.validate() {
            return Ok(None);
        }

        let kind = if has_payment_handle {
            SubmissionKind::ConfirmPayment
        } else {
            SubmissionKind::CreateOrder
        };

        self.phase = CheckoutPhase::Submitting(kind);

        Ok(Some(kind))
    }

    /// Record that a payment handle is available, moving an editing form to payment confirmation.
    pub fn attach_payment_handle(&mut self) {
        if self.phase == CheckoutPhase::Editing {
            self.phase = CheckoutPhase::AwaitingPaymentConfirmation;
        }
    }

    /// Settle a running submission into the given phase.
    pub fn finish_submission(&mut self, next: CheckoutPhase) {
        if self.is_submitting() {
            self.phase = next;
        }
    }

    /// Settle a failed submission, returning to where the customer can retry.
    pub fn abort_submission(&mut self) {
        self.phase = match self.phase {
            CheckoutPhase::Submitting(SubmissionKind::CreateOrder) => CheckoutPhase::Editing,
            CheckoutPhase::Submitting(SubmissionKind::ConfirmPayment) => {
                CheckoutPhase::AwaitingPaymentConfirmation
            }
            other => other,
        };
    }
}
