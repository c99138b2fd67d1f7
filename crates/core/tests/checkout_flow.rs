//! End-to-end cart, totals and checkout flow

use jiff::Timestamp;
use rusty_money::{Money, iso::USD};
use storefront::{
    fixtures::{snapshot, uk_address},
    prelude::*,
    totals::{DOMESTIC_SHIPPING, USD_INTERNATIONAL_SHIPPING},
};
use testresult::TestResult;

#[test]
fn two_adds_then_currency_switch() -> TestResult {
    let mut cart = Cart::new();

    cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
    cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total_amount(), 359_98);

    let gbp = OrderTotals::compute(cart.lines(), CurrencyCode::GBP);

    assert_eq!(gbp.shipping_cost, DOMESTIC_SHIPPING);
    assert_eq!(gbp.total, 364_97);

    let usd = OrderTotals::compute(cart.lines(), CurrencyCode::USD);

    assert_eq!(usd.shipping_cost, USD_INTERNATIONAL_SHIPPING);
    assert_eq!(usd.total, 359_98 + USD_INTERNATIONAL_SHIPPING);
    assert_eq!(to_money(usd.total, CurrencyCode::USD), Money::from_minor(378_97, USD));

    Ok(())
}

#[test]
fn stored_cart_round_trips_through_json() -> TestResult {
    let mut cart = Cart::new();

    cart.add(snapshot("watch-1", 179_99), Timestamp::now())?;
    cart.add(snapshot("watch-2", 95_50), Timestamp::now())?;
    cart.update_quantity(&ProductId::new("watch-2"), 3)?;

    let stored = serde_json::to_string(cart.lines())?;
    let restored = Cart::from_lines(serde_json::from_str(&stored)?)?;

    assert_eq!(restored, cart);
    assert_eq!(restored.total_amount(), 179_99 + 3 * 95_50);

    Ok(())
}

#[test]
fn checkout_payload_follows_form_state() -> TestResult {
    let mut form = CheckoutForm::new();

    form.set_customer_email("john@doe.com");
    form.set_customer_name("John Doe");
    form.set_shipping_address(uk_address());

    assert_eq!(
        form.begin_submission(false)?,
        Some(SubmissionKind::CreateOrder)
    );

    let request = form.order_request();

    assert_eq!(request.billing_address, request.shipping_address);

    let payload = serde_json::to_value(&request)?;

    assert_eq!(payload["shippingAddress"]["addressLine1"], "1 Clock Tower Lane");
    assert_eq!(payload["billingAddress"]["postalCode"], "EC1A 1BB");
    assert!(payload.get("customerPhone").is_none());

    form.finish_submission(CheckoutPhase::AwaitingPaymentConfirmation);

    assert_eq!(form.submit_label(), "Complete Order");

    Ok(())
}
