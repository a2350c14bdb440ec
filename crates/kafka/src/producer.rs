//! Stream publisher backed by rskafka.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use analytics_core::{Error, Result, Stream, StreamPayload};
use async_trait::async_trait;
use chrono::Utc;
use rskafka::client::{
    partition::{Compression, PartitionClient, UnknownTopicHandling},
    Client, ClientBuilder,
};
use rskafka::record::Record;
use telemetry::metrics;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::config::KafkaConfig;

/// Publish seam between the ingestion service and the broker.
///
/// The production implementation is [`KafkaPublisher`]; tests substitute a
/// capturing mock.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes one payload onto a stream. A failed round-trip fails the
    /// surrounding request; there is no buffering or retry at this layer.
    async fn publish(&self, stream: Stream, payload: StreamPayload) -> Result<()>;

    fn is_healthy(&self) -> bool;
}

/// Kafka-backed publisher.
///
/// One client per process; partition clients are created lazily per stream
/// and cached for the process lifetime. Safe for concurrent use by many
/// in-flight requests.
pub struct KafkaPublisher {
    client: Client,
    config: KafkaConfig,
    /// Cached partition clients per stream topic
    partitions: RwLock<BTreeMap<&'static str, Arc<PartitionClient>>>,
}

impl KafkaPublisher {
    /// Connects to the brokers and creates a publisher.
    pub async fn new(config: KafkaConfig) -> Result<Self> {
        let client = ClientBuilder::new(config.brokers.clone())
            .build()
            .await
            .map_err(|e| Error::publish(format!("failed to connect to brokers: {}", e)))?;

        Ok(Self {
            client,
            config,
            partitions: RwLock::new(BTreeMap::new()),
        })
    }

    /// Gets or creates the partition client for a stream.
    async fn partition_client(&self, stream: Stream) -> Result<Arc<PartitionClient>> {
        let topic = stream.as_str();

        {
            let partitions = self.partitions.read().await;
            if let Some(client) = partitions.get(topic) {
                return Ok(client.clone());
            }
        }

        // All events of a stream go through partition 0; ordering across
        // events is whatever the broker provides on that partition.
        let partition_client = self
            .client
            .partition_client(topic.to_string(), 0, UnknownTopicHandling::Retry)
            .await
            .map_err(|e| Error::publish(format!("failed to get partition client: {}", e)))?;

        let partition_client = Arc::new(partition_client);

        {
            let mut partitions = self.partitions.write().await;
            partitions.insert(topic, partition_client.clone());
        }

        Ok(partition_client)
    }

    fn compression(&self) -> Compression {
        match self.config.compression.as_str() {
            "gzip" => Compression::Gzip,
            "snappy" => Compression::Snappy,
            "lz4" => Compression::Lz4,
            "zstd" => Compression::Zstd,
            _ => Compression::NoCompression,
        }
    }
}

#[async_trait]
impl EventPublisher for KafkaPublisher {
    async fn publish(&self, stream: Stream, payload: StreamPayload) -> Result<()> {
        let value = serde_json::to_vec(&payload)?;
        let client = self.partition_client(stream).await?;

        let record = Record {
            key: None,
            value: Some(value),
            headers: BTreeMap::new(),
            timestamp: Utc::now(),
        };

        let start = std::time::Instant::now();

        match client.produce(vec![record], self.compression()).await {
            Ok(_offsets) => {
                metrics().events_published.inc();

                let elapsed = start.elapsed();
                metrics().publish_latency_ms.observe(elapsed.as_millis() as u64);

                debug!(
                    stream = %stream,
                    latency_ms = %elapsed.as_millis(),
                    "Published event"
                );

                Ok(())
            }
            Err(e) => {
                error!("Failed to publish to {}: {}", stream, e);
                metrics().publish_errors.inc();
                Err(Error::publish(format!("failed to produce: {}", e)))
            }
        }
    }

    fn is_healthy(&self) -> bool {
        true
    }
}

/// Connection timeout for startup probes.
pub(crate) const CONNECT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
