//! Checkout
//!
//! Address entry, validation and the submission lifecycle of the checkout form.

mod address;
mod form;
mod request;
mod validation;

pub use address::{Address, AddressField, Country};
pub use form::{CheckoutForm, CheckoutPhase, CustomerProfile, FormError, SubmissionKind};
pub use request::OrderRequest;
pub use validation::{FieldErrors, FieldKey, ValidationInput, validate};
