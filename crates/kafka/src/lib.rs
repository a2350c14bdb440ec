//! Kafka publisher and topic provisioning for the analytics pipeline.

pub mod admin;
pub mod config;
pub mod health;
pub mod producer;

pub use admin::ensure_streams;
pub use config::*;
pub use producer::{EventPublisher, KafkaPublisher};
