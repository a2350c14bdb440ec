//! Tests for the health check endpoints.

use axum::http::StatusCode;
use integration_tests::setup::TestContext;

/// /health returns the component report structure.
#[tokio::test]
async fn test_health_endpoint_structure() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert!(body.get("status").is_some());
    assert!(body.get("kafka_connected").is_some());
    assert!(body.get("clickhouse_connected").is_some());

    let status = body["status"].as_str().unwrap_or("");
    assert!(
        status == "healthy" || status == "degraded" || status == "unhealthy",
        "unexpected status '{}'",
        status
    );
}

/// Readiness tracks the broker connection state.
#[tokio::test]
async fn test_ready_endpoint() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health/ready").await;
    let status = response.status_code();
    assert!(
        status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE,
        "ready endpoint should return 200 or 503, got {}",
        status
    );
}

/// Liveness always answers while the service runs.
#[tokio::test]
async fn test_live_endpoint() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health/live").await;
    response.assert_status_ok();
}
