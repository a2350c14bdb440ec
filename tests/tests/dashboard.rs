//! Tests for the dashboard endpoint.

use analytics_core::{MetricType, Value};
use integration_tests::fixtures::{date_amount_row, row};
use integration_tests::setup::TestContext;
use serde_json::json;

/// The dashboard queries every metric exactly once and returns a value for
/// each, even with an empty store.
#[tokio::test]
async fn test_dashboard_covers_every_metric() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/dashboard").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let metrics = body["metrics"]
        .as_object()
        .expect("metrics should be an object");

    assert_eq!(metrics.len(), MetricType::ALL.len());
    for metric in MetricType::ALL {
        assert!(
            metrics.contains_key(metric.as_str()),
            "missing {}",
            metric
        );
    }

    // One store query per metric, in declaration order.
    assert_eq!(ctx.store.queried(), MetricType::ALL.to_vec());
}

/// Empty result sets become type-appropriate defaults, not errors.
#[tokio::test]
async fn test_empty_store_yields_defaults() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/dashboard").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let metrics = &body["metrics"];

    assert_eq!(metrics["daily_active_users"], json!({"value": 0}));
    assert_eq!(metrics["daily_revenue"], json!({"value": 0.0}));
    assert_eq!(metrics["most_active_event_type"], json!({"value": ""}));
    assert_eq!(metrics["revenue_trend_30_days"], json!({"points": []}));
    assert_eq!(metrics["top_pages_by_views"], json!({"rows": []}));
}

/// Seeded rows surface as typed, ordered results.
#[tokio::test]
async fn test_seeded_metrics_are_shaped_and_ordered() {
    let ctx = TestContext::new();

    ctx.store.seed(MetricType::Dau, vec![row(vec![Value::UInt(42)])]);
    ctx.store.seed(
        MetricType::MostActiveEventType,
        vec![row(vec![Value::Text("page_view".into())])],
    );
    ctx.store.seed(
        MetricType::RevenueTrend30Days,
        vec![
            date_amount_row("2025-01-01", 10.0),
            date_amount_row("2025-01-02", 5.5),
            date_amount_row("2025-01-03", 20.0),
        ],
    );
    ctx.store.seed(
        MetricType::UserJourneyFunnel,
        vec![row(vec![
            Value::Date("2025-01-01".parse().unwrap()),
            Value::Null,
            Value::UInt(5),
            Value::Null,
        ])],
    );

    let response = ctx.server.get("/dashboard").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let metrics = &body["metrics"];

    assert_eq!(metrics["daily_active_users"], json!({"value": 42}));
    assert_eq!(metrics["most_active_event_type"], json!({"value": "page_view"}));

    // Store ordering is preserved, not re-sorted.
    assert_eq!(
        metrics["revenue_trend_30_days"],
        json!({"points": [
            {"date": "2025-01-01", "revenue": 10.0},
            {"date": "2025-01-02", "revenue": 5.5},
            {"date": "2025-01-03", "revenue": 20.0}
        ]})
    );

    // Null funnel aggregates coalesce to zero.
    assert_eq!(
        metrics["user_journey_funnel"],
        json!({"points": [
            {"time": "2025-01-01", "page_views": 0, "cart_additions": 5, "searches": 0}
        ]})
    );
}

/// A single failed metric query fails the whole dashboard request.
#[tokio::test]
async fn test_single_metric_failure_aborts_response() {
    let ctx = TestContext::new();
    ctx.store.fail_on(MetricType::CartAbandonmentRate);

    let response = ctx.server.get("/dashboard").await;
    assert_eq!(response.status_code().as_u16(), 502);

    let body: serde_json::Value = response.json();
    assert!(body.get("metrics").is_none(), "no partial results");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("cart_abandonment_rate"));
}
