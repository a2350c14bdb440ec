//! Core types for the analytics pipeline: the event taxonomy and its stream
//! routing, and the metric taxonomy with its query dispatch and row parsing.

pub mod error;
pub mod events;
pub mod metrics;
pub mod parse;
pub mod queries;
pub mod router;
pub mod row;

pub use error::{Error, Result};
pub use events::*;
pub use metrics::*;
pub use parse::parse;
pub use queries::{dispatch, MetricQuery, ResultShape};
pub use router::{route, StreamPayload, PAYLOAD_TIMESTAMP_FORMAT};
pub use row::{Row, Value};
