//! Mock implementations for testing.

use std::collections::BTreeMap;
use std::sync::Arc;

use analytics_core::{Error, MetricType, Result, Row, Stream, StreamPayload};
use async_trait::async_trait;
use clickhouse_client::MetricStore;
use kafka::EventPublisher;
use parking_lot::Mutex;

/// Mock publisher that captures payloads in memory.
///
/// Implements the same `EventPublisher` trait as the real `KafkaPublisher`,
/// so tests can verify the exact stream and payload an event would be
/// published with, without a broker.
#[derive(Clone, Default)]
pub struct MockPublisher {
    /// All (stream, payload) pairs published through this publisher.
    published: Arc<Mutex<Vec<(Stream, StreamPayload)>>>,
    /// Simulate failures if set.
    should_fail: Arc<Mutex<bool>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured (stream, payload) pairs.
    pub fn captured(&self) -> Vec<(Stream, StreamPayload)> {
        self.published.lock().clone()
    }

    /// Get the count of captured publishes.
    pub fn publish_count(&self) -> usize {
        self.published.lock().len()
    }

    /// Set failure mode for testing error handling.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }
}

#[async_trait]
impl EventPublisher for MockPublisher {
    async fn publish(&self, stream: Stream, payload: StreamPayload) -> Result<()> {
        if *self.should_fail.lock() {
            return Err(Error::publish("mock publisher failure"));
        }

        self.published.lock().push((stream, payload));
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        !*self.should_fail.lock()
    }
}

/// Mock metric store returning canned rows.
///
/// Unseeded metrics return an empty row set, which the parser must turn
/// into type-appropriate defaults.
#[derive(Clone, Default)]
pub struct MockMetricStore {
    rows: Arc<Mutex<BTreeMap<MetricType, Vec<Row>>>>,
    /// Metrics queried, in call order.
    queried: Arc<Mutex<Vec<MetricType>>>,
    /// Fail the query for this metric if set.
    fail_on: Arc<Mutex<Option<MetricType>>>,
}

impl MockMetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed canned rows for a metric.
    pub fn seed(&self, metric: MetricType, rows: Vec<Row>) {
        self.rows.lock().insert(metric, rows);
    }

    /// Metrics queried so far, in call order.
    pub fn queried(&self) -> Vec<MetricType> {
        self.queried.lock().clone()
    }

    /// Make the query for one metric fail.
    pub fn fail_on(&self, metric: MetricType) {
        *self.fail_on.lock() = Some(metric);
    }
}

#[async_trait]
impl MetricStore for MockMetricStore {
    async fn metric_rows(&self, metric: MetricType) -> Result<Vec<Row>> {
        self.queried.lock().push(metric);

        if *self.fail_on.lock() == Some(metric) {
            return Err(Error::query(format!("mock store failure: {}", metric)));
        }

        Ok(self.rows.lock().get(&metric).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_core::Value;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_publisher_captures_payloads() {
        let mock = MockPublisher::new();

        let mut payload = StreamPayload::new();
        payload.insert("user_id".into(), json!("u1"));

        mock.publish(Stream::UserEvents, payload).await.unwrap();
        assert_eq!(mock.publish_count(), 1);

        let captured = mock.captured();
        assert_eq!(captured[0].0, Stream::UserEvents);
        assert_eq!(captured[0].1["user_id"], "u1");
    }

    #[tokio::test]
    async fn test_mock_publisher_failure_mode() {
        let mock = MockPublisher::new();
        mock.set_should_fail(true);

        let result = mock.publish(Stream::UserEvents, StreamPayload::new()).await;
        assert!(result.is_err());
        assert!(!mock.is_healthy());
    }

    #[tokio::test]
    async fn test_mock_store_defaults_to_empty_rows() {
        let mock = MockMetricStore::new();
        assert_eq!(mock.metric_rows(MetricType::Dau).await.unwrap(), vec![]);

        mock.seed(MetricType::Dau, vec![Row::new(vec![Value::UInt(3)])]);
        assert_eq!(mock.metric_rows(MetricType::Dau).await.unwrap().len(), 1);
        assert_eq!(mock.queried(), vec![MetricType::Dau, MetricType::Dau]);
    }
}
