//! ClickHouse client for the analytics pipeline.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod health;
pub mod schema;

pub use client::*;
pub use config::*;
pub use dashboard::MetricStore;
