//! Application state shared across handlers.

use std::sync::Arc;

use clickhouse_client::MetricStore;
use kafka::EventPublisher;

use crate::service::{DashboardService, EventService};

/// Shared application state.
///
/// Both collaborators are process-lifetime singletons injected at startup;
/// tests substitute in-memory mocks through the same seams.
#[derive(Clone)]
pub struct AppState {
    pub events: EventService,
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn new(publisher: Arc<dyn EventPublisher>, store: Arc<dyn MetricStore>) -> Self {
        Self {
            events: EventService::new(publisher),
            dashboard: DashboardService::new(store),
        }
    }
}
