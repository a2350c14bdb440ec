//! Metric store: runs dispatched dashboard queries against ClickHouse.

use async_trait::async_trait;
use chrono::NaiveDate;
use clickhouse::Row as ChRow;
use serde::Deserialize;
use telemetry::metrics;
use tracing::{debug, error};

use analytics_core::{dispatch, Error, MetricType, Result, ResultShape, Row, Value};

use crate::client::ClickHouseClient;

/// Query seam between the dashboard service and the columnar store.
///
/// One call performs exactly one query round-trip; rows come back fully
/// materialized in the store's ORDER BY order. Failures propagate to the
/// caller unmodified - no retry, no caching.
#[async_trait]
pub trait MetricStore: Send + Sync {
    async fn metric_rows(&self, metric: MetricType) -> Result<Vec<Row>>;
}

// RowBinary is positional; the field names below are documentation, the
// column order is the contract.

#[derive(ChRow, Deserialize)]
struct CountRow {
    value: u64,
}

#[derive(ChRow, Deserialize)]
struct AmountRow {
    value: f64,
}

#[derive(ChRow, Deserialize)]
struct LabelRow {
    value: String,
}

#[derive(ChRow, Deserialize)]
struct DateAmountRow {
    date: String,
    value: f64,
}

#[derive(ChRow, Deserialize)]
struct DateCountRow {
    date: String,
    value: u64,
}

#[derive(ChRow, Deserialize)]
struct HourCountRow {
    hour: u8,
    value: u64,
}

#[derive(ChRow, Deserialize)]
struct TextCountRow {
    label: String,
    value: u64,
}

#[derive(ChRow, Deserialize)]
struct OptTextCountRow {
    label: Option<String>,
    value: u64,
}

#[derive(ChRow, Deserialize)]
struct OptTextPairCountRow {
    name: Option<String>,
    value: Option<String>,
    count: u64,
}

#[derive(ChRow, Deserialize)]
struct OptTextCountCountRow {
    label: Option<String>,
    count: u64,
    users: u64,
}

#[derive(ChRow, Deserialize)]
struct TextCountAmountRow {
    label: String,
    count: u64,
    amount: f64,
}

#[derive(ChRow, Deserialize)]
struct FunnelRow {
    date: String,
    page_views: u64,
    cart_additions: u64,
    searches: u64,
}

/// Dates arrive as `toString(toDate(...))` text; anything unparseable
/// degrades to null and the parser's defaulting takes over.
fn date_value(s: String) -> Value {
    match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        Ok(date) => Value::Date(date),
        Err(_) => Value::Null,
    }
}

#[async_trait]
impl MetricStore for ClickHouseClient {
    async fn metric_rows(&self, metric: MetricType) -> Result<Vec<Row>> {
        let query = dispatch(metric);
        let start = std::time::Instant::now();
        metrics().metric_queries.inc();

        let result = match query.shape {
            ResultShape::Count => self
                .inner()
                .query(query.sql)
                .fetch_all::<CountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![Value::UInt(r.value)]))
                        .collect::<Vec<Row>>()
                }),
            ResultShape::Amount => self
                .inner()
                .query(query.sql)
                .fetch_all::<AmountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![Value::Float(r.value)]))
                        .collect()
                }),
            ResultShape::Label => self
                .inner()
                .query(query.sql)
                .fetch_all::<LabelRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![Value::Text(r.value)]))
                        .collect()
                }),
            ResultShape::DateAmount => self
                .inner()
                .query(query.sql)
                .fetch_all::<DateAmountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![date_value(r.date), Value::Float(r.value)]))
                        .collect()
                }),
            ResultShape::DateCount => self
                .inner()
                .query(query.sql)
                .fetch_all::<DateCountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![date_value(r.date), Value::UInt(r.value)]))
                        .collect()
                }),
            ResultShape::HourCount => self
                .inner()
                .query(query.sql)
                .fetch_all::<HourCountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| {
                            Row::new(vec![Value::UInt(u64::from(r.hour)), Value::UInt(r.value)])
                        })
                        .collect()
                }),
            ResultShape::TextCount => self
                .inner()
                .query(query.sql)
                .fetch_all::<TextCountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![Value::Text(r.label), Value::UInt(r.value)]))
                        .collect()
                }),
            ResultShape::OptTextCount => self
                .inner()
                .query(query.sql)
                .fetch_all::<OptTextCountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| Row::new(vec![Value::from(r.label), Value::UInt(r.value)]))
                        .collect()
                }),
            ResultShape::OptTextPairCount => self
                .inner()
                .query(query.sql)
                .fetch_all::<OptTextPairCountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| {
                            Row::new(vec![
                                Value::from(r.name),
                                Value::from(r.value),
                                Value::UInt(r.count),
                            ])
                        })
                        .collect()
                }),
            ResultShape::OptTextCountCount => self
                .inner()
                .query(query.sql)
                .fetch_all::<OptTextCountCountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| {
                            Row::new(vec![
                                Value::from(r.label),
                                Value::UInt(r.count),
                                Value::UInt(r.users),
                            ])
                        })
                        .collect()
                }),
            ResultShape::TextCountAmount => self
                .inner()
                .query(query.sql)
                .fetch_all::<TextCountAmountRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| {
                            Row::new(vec![
                                Value::Text(r.label),
                                Value::UInt(r.count),
                                Value::Float(r.amount),
                            ])
                        })
                        .collect()
                }),
            ResultShape::Funnel => self
                .inner()
                .query(query.sql)
                .fetch_all::<FunnelRow>()
                .await
                .map(|rows| {
                    rows.into_iter()
                        .map(|r| {
                            Row::new(vec![
                                date_value(r.date),
                                Value::UInt(r.page_views),
                                Value::UInt(r.cart_additions),
                                Value::UInt(r.searches),
                            ])
                        })
                        .collect()
                }),
        };

        let elapsed = start.elapsed();
        metrics().query_latency_ms.observe(elapsed.as_millis() as u64);

        match result {
            Ok(rows) => {
                debug!(
                    metric = %metric,
                    rows = rows.len(),
                    latency_ms = %elapsed.as_millis(),
                    "Fetched metric rows"
                );
                Ok(rows)
            }
            Err(e) => {
                error!("Metric query failed for {}: {}", metric, e);
                metrics().metric_query_errors.inc();
                Err(Error::query(format!("{}: {}", metric, e)))
            }
        }
    }
}
