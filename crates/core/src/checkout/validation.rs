//! Checkout Validation

use std::collections::BTreeMap;

use crate::checkout::address::{Address, AddressField};

/// Keys of the inline error messages shown on the checkout form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    /// Customer email
    CustomerEmail,
    /// Customer name
    CustomerName,
    /// Shipping first name
    ShippingFirstName,
    /// Shipping last name
    ShippingLastName,
    /// Shipping address line 1
    ShippingAddressLine1,
    /// Shipping city
    ShippingCity,
    /// Shipping postal code
    ShippingPostalCode,
    /// Billing first name
    BillingFirstName,
    /// Billing last name
    BillingLastName,
    /// Billing address line 1
    BillingAddressLine1,
    /// Billing city
    BillingCity,
    /// Billing postal code
    BillingPostalCode,
}

impl FieldKey {
    /// Form field identifier, e.g. `shippingAddressLine1`.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKey::CustomerEmail => "customerEmail",
            FieldKey::CustomerName => "customerName",
            FieldKey::ShippingFirstName => "shippingFirstName",
            FieldKey::ShippingLastName => "shippingLastName",
            FieldKey::ShippingAddressLine1 => "shippingAddressLine1",
            FieldKey::ShippingCity => "shippingCity",
            FieldKey::ShippingPostalCode => "shippingPostalCode",
            FieldKey::BillingFirstName => "billingFirstName",
            FieldKey::BillingLastName => "billingLastName",
            FieldKey::BillingAddressLine1 => "billingAddressLine1",
            FieldKey::BillingCity => "billingCity",
            FieldKey::BillingPostalCode => "billingPostalCode",
        }
    }

    /// Message shown when the field is left empty.
    pub const fn message(self) -> &'static str {
        match self {
            FieldKey::CustomerEmail => "Email is required",
            FieldKey::CustomerName => "Name is required",
            FieldKey::ShippingFirstName | FieldKey::BillingFirstName => "First name is required",
            FieldKey::ShippingLastName | FieldKey::BillingLastName => "Last name is required",
            FieldKey::ShippingAddressLine1 | FieldKey::BillingAddressLine1 => "Address is required",
            FieldKey::ShippingCity | FieldKey::BillingCity => "City is required",
            FieldKey::ShippingPostalCode | FieldKey::BillingPostalCode => {
                "Postal code is required"
            }
        }
    }
}

/// Error messages keyed by form field.
pub type FieldErrors = BTreeMap<FieldKey, &'static str>;

const SHIPPING_REQUIRED: [(AddressField, FieldKey); 5] = [
    (AddressField::FirstName, FieldKey::ShippingFirstName),
    (AddressField::LastName, FieldKey::ShippingLastName),
    (AddressField::AddressLine1, FieldKey::ShippingAddressLine1),
    (AddressField::City, FieldKey::ShippingCity),
    (AddressField::PostalCode, FieldKey::ShippingPostalCode),
];

const BILLING_REQUIRED: [(AddressField, FieldKey); 5] = [
    (AddressField::FirstName, FieldKey::BillingFirstName),
    (AddressField::LastName, FieldKey::BillingLastName),
    (AddressField::AddressLine1, FieldKey::BillingAddressLine1),
    (AddressField::City, FieldKey::BillingCity),
    (AddressField::PostalCode, FieldKey::BillingPostalCode),
];

/// Fields checked by [`validate`].
#[derive(Clone, Copy, Debug)]
pub struct ValidationInput<'a> {
    /// Customer email
    pub customer_email: &'a str,

    /// Customer name
    pub customer_name: &'a str,

    /// Shipping address
    pub shipping: &'a Address,

    /// Billing address, or `None` when it mirrors the shipping address.
    pub billing: Option<&'a Address>,
}

/// Compute the full error map for the given field values.
pub fn validate(input: ValidationInput<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let mut require = |value: &str, key: FieldKey| {
        if value.is_empty() {
            errors.insert(key, key.message());
        }
    };

    require(input.customer_email, FieldKey::CustomerEmail);
    require(input.customer_name, FieldKey::CustomerName);

    for (field, key) in SHIPPING_REQUIRED {
        require(input.shipping.get(field), key);
    }

    if let Some(billing) = input.billing {
        for (field, key) in BILLING_REQUIRED {
            require(billing.get(field), key);
        }
    }

    errors
}
