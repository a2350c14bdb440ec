//! Event ingestion endpoints, one per event variant.

use analytics_core::Event;
use axum::{extract::State, Json};
use telemetry::metrics;
use tracing::error;
use validator::Validate;

use crate::requests::*;
use crate::response::{ApiError, SuccessResponse};
use crate::state::AppState;

/// Shared shape of every event handler: validate the body, build the typed
/// event, hand it to the ingestion service.
async fn ingest<R: Validate>(
    state: &AppState,
    request: R,
    build: impl FnOnce(R) -> Event,
) -> Result<Json<SuccessResponse>, ApiError> {
    metrics().events_received.inc();

    if let Err(e) = request.validate() {
        metrics().events_rejected.inc();
        return Err(ApiError::bad_request(e.to_string()));
    }

    let event = build(request);
    let start = std::time::Instant::now();

    state.events.process_event(event).await.map_err(|e| {
        error!("Failed to ingest event: {}", e);
        ApiError::from(e)
    })?;

    metrics()
        .ingest_latency_ms
        .observe(start.elapsed().as_millis() as u64);

    Ok(Json(SuccessResponse::new()))
}

/// POST /events/user-registered
pub async fn user_registered(
    State(state): State<AppState>,
    Json(request): Json<UserRegisteredRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, UserRegisteredRequest::into_event).await
}

/// POST /events/user-login
pub async fn user_login(
    State(state): State<AppState>,
    Json(request): Json<UserLoginRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, UserLoginRequest::into_event).await
}

/// POST /events/transaction
pub async fn transaction(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, TransactionRequest::into_event).await
}

/// POST /events/element-click
pub async fn element_click(
    State(state): State<AppState>,
    Json(request): Json<ElementClickRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, ElementClickRequest::into_event).await
}

/// POST /events/search
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, SearchRequest::into_event).await
}

/// POST /events/page-view
pub async fn page_view(
    State(state): State<AppState>,
    Json(request): Json<PageViewRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, PageViewRequest::into_event).await
}

/// POST /events/form-submit
pub async fn form_submit(
    State(state): State<AppState>,
    Json(request): Json<FormSubmitRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, FormSubmitRequest::into_event).await
}

/// POST /events/item-added-to-cart
pub async fn item_added_to_cart(
    State(state): State<AppState>,
    Json(request): Json<CartItemRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, CartItemRequest::into_added_event).await
}

/// POST /events/item-removed-from-cart
pub async fn item_removed_from_cart(
    State(state): State<AppState>,
    Json(request): Json<CartItemRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, CartItemRequest::into_removed_event).await
}

/// POST /events/filter-applied
pub async fn filter_applied(
    State(state): State<AppState>,
    Json(request): Json<FilterAppliedRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    ingest(&state, request, FilterAppliedRequest::into_event).await
}
