//! HTTP API layer for the analytics pipeline.

pub mod requests;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use routes::router;
pub use service::{DashboardService, EventService};
pub use state::AppState;
