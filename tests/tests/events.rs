//! Tests for the event ingestion endpoints.
//!
//! Each endpoint is driven through the HTTP surface with a capturing mock
//! publisher, verifying the stream routing and published payload shape.

use integration_tests::fixtures::{
    event_cases, FIXTURE_TIMESTAMP, FIXTURE_TIMESTAMP_TRUNCATED,
};
use integration_tests::setup::TestContext;
use serde_json::json;

/// Every event endpoint accepts a valid body, routes to its fixed stream,
/// and stamps the matching discriminator.
#[tokio::test]
async fn test_every_endpoint_routes_to_its_stream() {
    let ctx = TestContext::new();

    for (path, body, _, _) in event_cases() {
        let response = ctx.server.post(path).json(&body).await;
        response.assert_status_ok();

        let ack: serde_json::Value = response.json();
        assert_eq!(ack["success"], true, "{} should acknowledge", path);
    }

    let captured = ctx.publisher.captured();
    assert_eq!(captured.len(), event_cases().len());

    for ((_, _, expected_stream, expected_type), (stream, payload)) in
        event_cases().iter().zip(captured.iter())
    {
        assert_eq!(stream, expected_stream, "{}", expected_type);
        assert_eq!(payload["event_type"], *expected_type);
        assert_eq!(payload["user_id"], "user-1");
        assert_eq!(payload["timestamp"], FIXTURE_TIMESTAMP_TRUNCATED);
    }
}

/// The transaction payload keeps `amount` numeric and matches the storage
/// column names exactly.
#[tokio::test]
async fn test_transaction_payload_shape() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/events/transaction")
        .json(&json!({
            "user_id": "user-1",
            "timestamp": FIXTURE_TIMESTAMP,
            "transaction_id": "tx-42",
            "amount": 19.99,
            "currency": "USD"
        }))
        .await;
    response.assert_status_ok();

    let captured = ctx.publisher.captured();
    let (stream, payload) = &captured[0];

    assert_eq!(stream.as_str(), "transaction_events");
    assert_eq!(payload["transaction_id"], "tx-42");
    assert_eq!(payload["amount"], json!(19.99));
    assert!(payload["amount"].is_number(), "amount must not be a string");
    assert_eq!(payload["currency"], "USD");
    assert_eq!(payload["event_type"], "transaction");
}

/// Sub-second timestamp precision is dropped at the payload boundary.
#[tokio::test]
async fn test_timestamp_truncated_to_second_precision() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/events/page-view")
        .json(&json!({
            "user_id": "user-1",
            "timestamp": "2025-01-01T10:30:45.123Z",
            "page": "/home"
        }))
        .await;
    response.assert_status_ok();

    let captured = ctx.publisher.captured();
    assert_eq!(captured[0].1["timestamp"], "2025-01-01 10:30:45");
}

/// An optional field that was not supplied is published as null.
#[tokio::test]
async fn test_element_click_without_page() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/events/element-click")
        .json(&json!({
            "user_id": "user-1",
            "timestamp": FIXTURE_TIMESTAMP,
            "element_name": "cta"
        }))
        .await;
    response.assert_status_ok();

    let captured = ctx.publisher.captured();
    assert!(captured[0].1["page"].is_null());
}

/// A failed publish fails the request; nothing is partially sent.
#[tokio::test]
async fn test_publish_failure_fails_the_request() {
    let ctx = TestContext::new();
    ctx.publisher.set_should_fail(true);

    let response = ctx
        .server
        .post("/events/user-login")
        .json(&json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP}))
        .await;

    assert_eq!(response.status_code().as_u16(), 502);
    assert_eq!(ctx.publisher.publish_count(), 0);
}

/// A body missing a required field is rejected before routing.
#[tokio::test]
async fn test_missing_field_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/events/search")
        .json(&json!({"user_id": "user-1", "timestamp": FIXTURE_TIMESTAMP}))
        .await;

    assert!(
        response.status_code().is_client_error(),
        "missing query should be a client error, got {}",
        response.status_code()
    );
    assert_eq!(ctx.publisher.publish_count(), 0);
}

/// A structurally valid body that fails field validation is a 400.
#[tokio::test]
async fn test_field_validation_failure() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/events/user-registered")
        .json(&json!({"user_id": "", "timestamp": FIXTURE_TIMESTAMP}))
        .await;

    assert_eq!(response.status_code().as_u16(), 400);
    assert_eq!(ctx.publisher.publish_count(), 0);
}
