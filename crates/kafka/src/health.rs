//! Kafka health checks.

use rskafka::client::ClientBuilder;
use tracing::{debug, error};

use crate::config::KafkaConfig;
use crate::producer::CONNECT_PROBE_TIMEOUT;

/// Check broker connection health.
pub async fn check_connection(config: &KafkaConfig) -> bool {
    let connect = async {
        match ClientBuilder::new(config.brokers.clone()).build().await {
            Ok(client) => match client.list_topics().await {
                Ok(topics) => {
                    debug!(topics = topics.len(), "Kafka connection healthy");
                    true
                }
                Err(e) => {
                    error!("Failed to list Kafka topics: {}", e);
                    false
                }
            },
            Err(e) => {
                error!("Failed to connect to Kafka: {}", e);
                false
            }
        }
    };

    match tokio::time::timeout(CONNECT_PROBE_TIMEOUT, connect).await {
        Ok(healthy) => healthy,
        Err(_) => {
            error!("Kafka health probe timed out");
            false
        }
    }
}
