//! Stream topic provisioning at startup.
//!
//! Creates the three stream topics if they are missing, waiting for the
//! broker with a bounded fixed-backoff retry loop. Runs once at startup,
//! never on the hot path.

use std::collections::HashSet;
use std::time::Duration;

use analytics_core::{Error, Result, Stream};
use rskafka::client::ClientBuilder;
use tracing::{error, info};

use crate::config::KafkaConfig;

/// Maximum connection attempts before giving up on the broker.
const MAX_ATTEMPTS: u32 = 30;

/// Fixed delay between attempts.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Ensures every stream topic exists, retrying while the broker comes up.
pub async fn ensure_streams(config: &KafkaConfig) -> Result<()> {
    for attempt in 1..=MAX_ATTEMPTS {
        match create_missing_streams(config).await {
            Ok(created) => {
                if created.is_empty() {
                    info!("Stream topics already exist");
                } else {
                    info!(topics = ?created, "Created stream topics");
                }
                return Ok(());
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                info!(
                    "Broker not ready, retrying in {}s (attempt {}/{}): {}",
                    RETRY_DELAY.as_secs(),
                    attempt,
                    MAX_ATTEMPTS,
                    e
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                error!("Broker not available after {} attempts", MAX_ATTEMPTS);
                return Err(e);
            }
        }
    }

    Err(Error::publish("broker not available"))
}

/// One provisioning pass: list topics, create the missing streams.
async fn create_missing_streams(config: &KafkaConfig) -> Result<Vec<&'static str>> {
    let client = ClientBuilder::new(config.brokers.clone())
        .build()
        .await
        .map_err(|e| Error::publish(format!("failed to connect to brokers: {}", e)))?;

    let existing: HashSet<String> = client
        .list_topics()
        .await
        .map_err(|e| Error::publish(format!("failed to list topics: {}", e)))?
        .into_iter()
        .map(|t| t.name)
        .collect();

    let missing: Vec<&'static str> = Stream::ALL
        .iter()
        .map(|s| s.as_str())
        .filter(|name| !existing.contains(*name))
        .collect();

    if missing.is_empty() {
        return Ok(missing);
    }

    let controller = client
        .controller_client()
        .map_err(|e| Error::publish(format!("failed to get controller: {}", e)))?;

    for name in &missing {
        controller
            .create_topic(
                *name,
                config.topic_partitions,
                config.replication_factor,
                config.create_timeout_ms,
            )
            .await
            .map_err(|e| Error::publish(format!("failed to create topic {}: {}", name, e)))?;
    }

    Ok(missing)
}
