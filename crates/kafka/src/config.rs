//! Kafka configuration.

use serde::{Deserialize, Serialize};

/// Kafka connection and provisioning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KafkaConfig {
    /// Broker addresses
    pub brokers: Vec<String>,
    /// Partitions per stream topic
    #[serde(default = "default_topic_partitions")]
    pub topic_partitions: i32,
    /// Replication factor for stream topics
    #[serde(default = "default_replication_factor")]
    pub replication_factor: i16,
    /// Compression type (none, gzip, snappy, lz4, zstd)
    #[serde(default = "default_compression")]
    pub compression: String,
    /// Topic creation timeout in milliseconds
    #[serde(default = "default_create_timeout_ms")]
    pub create_timeout_ms: i32,
}

fn default_topic_partitions() -> i32 {
    3
}

fn default_replication_factor() -> i16 {
    1
}

fn default_compression() -> String {
    "lz4".to_string()
}

fn default_create_timeout_ms() -> i32 {
    30_000
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: vec!["localhost:9092".to_string()],
            topic_partitions: default_topic_partitions(),
            replication_factor: default_replication_factor(),
            compression: default_compression(),
            create_timeout_ms: default_create_timeout_ms(),
        }
    }
}

impl KafkaConfig {
    /// Returns the broker list as a comma-separated string.
    pub fn broker_string(&self) -> String {
        self.brokers.join(",")
    }
}
