//! Unified error types for the analytics pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the analytics pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// An event discriminator that matches none of the known variants.
    ///
    /// The event set is closed and routing matches on it exhaustively, so
    /// this only surfaces at the wire boundary when a body carries an
    /// unknown `event_type` tag.
    #[error("unknown event type: {0}")]
    InvalidEvent(String),

    /// A metric identifier outside the closed metric set.
    #[error("unsupported metric type: {0}")]
    UnsupportedMetric(String),

    /// The broker publish round-trip failed.
    #[error("publish failed: {0}")]
    Publish(String),

    /// The store query round-trip failed.
    #[error("query failed: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn publish(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::InvalidEvent(_) => 400,
            Self::UnsupportedMetric(_) => 400,
            Self::Serialization(_) => 400,
            Self::Publish(_) => 502,
            Self::Query(_) => 502,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
        }
    }
}
