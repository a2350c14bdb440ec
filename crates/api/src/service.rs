//! Thin orchestration services between transport and collaborators.

use std::collections::BTreeMap;
use std::sync::Arc;

use analytics_core::{parse, route, Event, MetricResult, MetricType, Result};
use clickhouse_client::MetricStore;
use kafka::EventPublisher;
use tracing::debug;

/// Ingestion orchestration: validate happened at the boundary, so this is
/// route then publish. No buffering, batching, or retry - a failed send is
/// a failed request.
#[derive(Clone)]
pub struct EventService {
    publisher: Arc<dyn EventPublisher>,
}

impl EventService {
    pub fn new(publisher: Arc<dyn EventPublisher>) -> Self {
        Self { publisher }
    }

    pub async fn process_event(&self, event: Event) -> Result<()> {
        let (stream, payload) = route(&event);

        debug!(
            stream = %stream,
            event_type = event.kind.event_type(),
            "Routing event"
        );

        self.publisher.publish(stream, payload).await
    }
}

/// Dashboard orchestration: one store query per metric, full taxonomy, in
/// declaration order. A failure on any single metric aborts the whole
/// response - there is no partial-result mode.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn MetricStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn MetricStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_metrics(&self) -> Result<BTreeMap<MetricType, MetricResult>> {
        let mut results = BTreeMap::new();

        for metric in MetricType::ALL {
            let rows = self.store.metric_rows(metric).await?;
            results.insert(metric, parse(metric, rows));
        }

        Ok(results)
    }
}
