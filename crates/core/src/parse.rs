//! Row parsing: reshapes raw result rows into typed metric results.

use crate::metrics::*;
use crate::row::{Row, Value};

fn scalar_u64(rows: &[Row]) -> u64 {
    rows.first()
        .and_then(|r| r.get(0))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

fn scalar_f64(rows: &[Row]) -> f64 {
    rows.first()
        .and_then(|r| r.get(0))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

fn scalar_text(rows: &[Row]) -> String {
    rows.first()
        .and_then(|r| r.get(0))
        .and_then(Value::as_text)
        .unwrap_or_default()
        .to_string()
}

/// Maps a result row set to the metric's typed result.
///
/// Total over the closed metric set. An empty row set is not an error:
/// scalar metrics default to a type-appropriate zero value and series
/// metrics to an empty sequence. Rows are mapped positionally, preserving
/// the order the aggregation query returned them in; null aggregate columns
/// coalesce to zero.
pub fn parse(metric: MetricType, rows: Vec<Row>) -> MetricResult {
    match metric {
        MetricType::Dau => MetricResult::Dau(CountValue {
            value: scalar_u64(&rows),
        }),
        MetricType::Wau => MetricResult::Wau(CountValue {
            value: scalar_u64(&rows),
        }),
        MetricType::Mau => MetricResult::Mau(CountValue {
            value: scalar_u64(&rows),
        }),
        MetricType::NewRegistrationsToday => MetricResult::NewRegistrationsToday(CountValue {
            value: scalar_u64(&rows),
        }),
        MetricType::DailyRevenue => MetricResult::DailyRevenue(AmountValue {
            value: scalar_f64(&rows),
        }),
        MetricType::AverageOrderValue => MetricResult::AverageOrderValue(AmountValue {
            value: scalar_f64(&rows),
        }),
        MetricType::Arpu7Days => MetricResult::Arpu7Days(AmountValue {
            value: scalar_f64(&rows),
        }),
        MetricType::TotalTransactionsToday => MetricResult::TotalTransactionsToday(CountValue {
            value: scalar_u64(&rows),
        }),
        MetricType::CartAbandonmentRate => MetricResult::CartAbandonmentRate(AmountValue {
            value: scalar_f64(&rows),
        }),
        MetricType::ConversionRateCartToPurchase => {
            MetricResult::ConversionRateCartToPurchase(AmountValue {
                value: scalar_f64(&rows),
            })
        }
        MetricType::UserEngagementScore => MetricResult::UserEngagementScore(AmountValue {
            value: scalar_f64(&rows),
        }),
        MetricType::MostActiveEventType => MetricResult::MostActiveEventType(LabelValue {
            value: scalar_text(&rows),
        }),
        MetricType::TotalPageViews => MetricResult::TotalPageViews(CountValue {
            value: scalar_u64(&rows),
        }),
        MetricType::RevenueTrend30Days => MetricResult::RevenueTrend30Days(Points {
            points: rows
                .iter()
                .map(|row| RevenuePoint {
                    date: row.date_at(0),
                    revenue: row.f64_at(1),
                })
                .collect(),
        }),
        MetricType::UserActivityTrend30Days => MetricResult::UserActivityTrend30Days(Points {
            points: rows
                .iter()
                .map(|row| UserActivityPoint {
                    date: row.date_at(0),
                    active_users: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::UserRegistrationTrend => MetricResult::UserRegistrationTrend(Points {
            points: rows
                .iter()
                .map(|row| RegistrationPoint {
                    date: row.date_at(0),
                    registrations: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::DailyActivityTrend => MetricResult::DailyActivityTrend(Points {
            points: rows
                .iter()
                .map(|row| ActivityPoint {
                    time: row.date_at(0),
                    events: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::UserJourneyFunnel => MetricResult::UserJourneyFunnel(Points {
            points: rows
                .iter()
                .map(|row| FunnelPoint {
                    time: row.date_at(0),
                    page_views: row.u64_at(1),
                    cart_additions: row.u64_at(2),
                    searches: row.u64_at(3),
                })
                .collect(),
        }),
        MetricType::TopPagesByViews => MetricResult::TopPagesByViews(TableRows {
            rows: rows
                .iter()
                .map(|row| PageViewRow {
                    page: row.text_at(0),
                    views: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::SearchQueries => MetricResult::SearchQueries(TableRows {
            rows: rows
                .iter()
                .map(|row| SearchQueryRow {
                    query: row.text_at(0),
                    search_count: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::MostClickedElements => MetricResult::MostClickedElements(TableRows {
            rows: rows
                .iter()
                .map(|row| ClickedElementRow {
                    element_name: row.text_at(0),
                    clicks: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::FilterUsage => MetricResult::FilterUsage(TableRows {
            rows: rows
                .iter()
                .map(|row| FilterUsageRow {
                    filter_name: row.text_at(0),
                    filter_value: row.text_at(1),
                    usage_count: row.u64_at(2),
                })
                .collect(),
        }),
        MetricType::TopPerformingProducts => MetricResult::TopPerformingProducts(TableRows {
            rows: rows
                .iter()
                .map(|row| ProductRow {
                    product_id: row.text_at(0),
                    cart_additions: row.u64_at(1),
                    unique_users: row.u64_at(2),
                })
                .collect(),
        }),
        MetricType::ActivityByHour => MetricResult::ActivityByHour(TableRows {
            rows: rows
                .iter()
                .map(|row| HourlyActivityRow {
                    hour: row.u64_at(0) as u8,
                    events: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::EventTypeDistribution => MetricResult::EventTypeDistribution(TableRows {
            rows: rows
                .iter()
                .map(|row| EventDistributionRow {
                    event_type: row.text_at(0),
                    value: row.u64_at(1),
                })
                .collect(),
        }),
        MetricType::TransactionVolumeByCurrency => {
            MetricResult::TransactionVolumeByCurrency(TableRows {
                rows: rows
                    .iter()
                    .map(|row| CurrencyVolumeRow {
                        currency: row.text_at(0),
                        transactions: row.u64_at(1),
                        total_amount: row.f64_at(2),
                    })
                    .collect(),
            })
        }
    }
}
