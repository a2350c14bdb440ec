//! API routes.

pub mod dashboard;
pub mod events;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the API router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events/user-registered", post(events::user_registered))
        .route("/events/user-login", post(events::user_login))
        .route("/events/transaction", post(events::transaction))
        .route("/events/element-click", post(events::element_click))
        .route("/events/search", post(events::search))
        .route("/events/page-view", post(events::page_view))
        .route("/events/form-submit", post(events::form_submit))
        .route("/events/item-added-to-cart", post(events::item_added_to_cart))
        .route(
            "/events/item-removed-from-cart",
            post(events::item_removed_from_cart),
        )
        .route("/events/filter-applied", post(events::filter_applied))
        .route("/dashboard", get(dashboard::dashboard_handler))
        .route("/health", get(health::health_handler))
        .route("/health/ready", get(health::ready_handler))
        .route("/health/live", get(health::live_handler))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
