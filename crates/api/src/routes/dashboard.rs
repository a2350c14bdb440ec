//! Dashboard endpoint.

use axum::{extract::State, Json};
use telemetry::metrics;
use tracing::{error, info};

use crate::response::{ApiError, DashboardResponse};
use crate::state::AppState;

/// GET /dashboard - All metrics, keyed by metric identifier.
///
/// All-or-nothing: a single failed metric query fails the whole request
/// rather than returning a dashboard with holes.
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let start = std::time::Instant::now();
    metrics().dashboard_requests.inc();

    let results = state.dashboard.get_all_metrics().await.map_err(|e| {
        error!("Failed to assemble dashboard: {}", e);
        metrics().dashboard_errors.inc();
        ApiError::from(e)
    })?;

    let latency_ms = start.elapsed().as_millis() as u64;
    metrics().dashboard_latency_ms.observe(latency_ms);

    info!(
        metrics = results.len(),
        latency_ms = latency_ms,
        "Dashboard assembled"
    );

    Ok(Json(DashboardResponse { metrics: results }))
}
