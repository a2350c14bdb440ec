//! Test fixtures: request bodies and row builders.

use analytics_core::{Row, Stream, Value};
use serde_json::{json, Value as Json};

/// Timestamp used across fixtures; carries sub-second precision so payload
/// truncation is observable.
pub const FIXTURE_TIMESTAMP: &str = "2025-01-01T10:30:45.123Z";

/// The truncated form the router is expected to publish.
pub const FIXTURE_TIMESTAMP_TRUNCATED: &str = "2025-01-01 10:30:45";

/// One case per event endpoint: path, request body, expected stream, and
/// expected discriminator.
pub fn event_cases() -> Vec<(&'static str, Json, Stream, &'static str)> {
    vec![
        (
            "/events/user-registered",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP}),
            Stream::UserEvents,
            "user_registered",
        ),
        (
            "/events/user-login",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP}),
            Stream::UserEvents,
            "user_login",
        ),
        (
            "/events/transaction",
            json!({
                "user_id": "user-1",
                "timestamp": FIXTURE_TIMESTAMP,
                "transaction_id": "tx-42",
                "amount": 19.99,
                "currency": "USD"
            }),
            Stream::TransactionEvents,
            "transaction",
        ),
        (
            "/events/element-click",
            json!({
                "user_id": "user-1",
                "timestamp": FIXTURE_TIMESTAMP,
                "element_name": "checkout-button",
                "page": "/cart"
            }),
            Stream::InteractionEvents,
            "element_click",
        ),
        (
            "/events/search",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP, "query": "red shoes"}),
            Stream::InteractionEvents,
            "search",
        ),
        (
            "/events/page-view",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP, "page": "/home"}),
            Stream::InteractionEvents,
            "page_view",
        ),
        (
            "/events/form-submit",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP, "form_name": "signup"}),
            Stream::InteractionEvents,
            "form_submit",
        ),
        (
            "/events/item-added-to-cart",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP, "item_id": "sku-7"}),
            Stream::InteractionEvents,
            "item_added_to_cart",
        ),
        (
            "/events/item-removed-from-cart",
            json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP, "item_id": "sku-7"}),
            Stream::InteractionEvents,
            "item_removed_from_cart",
        ),
        (
            "/events/filter-applied",
            json!({
                "user_id": "user-1",
                "timestamp": FIXTURE_TIMESTAMP,
                "filter_name": "color",
                "filter_value": "red",
                "page": "/catalog"
            }),
            Stream::InteractionEvents,
            "filter_applied",
        ),
    ]
}

/// Shorthand row builder.
pub fn row(values: Vec<Value>) -> Row {
    Row::new(values)
}

/// A (date, amount) row as the store would return it.
pub fn date_amount_row(date: &str, amount: f64) -> Row {
    Row::new(vec![
        Value::Date(date.parse().unwrap()),
        Value::Float(amount),
    ])
}
