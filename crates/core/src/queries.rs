//! Static query dispatch table for the dashboard metrics.
//!
//! Every metric maps to exactly one aggregation query over one of the three
//! stream storage tables, plus a shape descriptor telling the store layer
//! which column signature to fetch. The table is data: no user input ever
//! reaches the SQL text.
//!
//! Numeric result columns are coerced in SQL (`toFloat64`, `toString` on
//! dates) so every column arrives as one of the fixed scalar kinds the row
//! model carries.

use crate::metrics::MetricType;

/// Column signature of a metric's result set.
///
/// `OptText` columns come from Nullable(String) storage columns and may be
/// null on the wire even when the query filters nulls out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// Single row, single UInt64 column.
    Count,
    /// Single row, single Float64 column.
    Amount,
    /// At most one row, single String column.
    Label,
    /// (date, Float64) series.
    DateAmount,
    /// (date, UInt64) series.
    DateCount,
    /// (UInt8 hour, UInt64) series.
    HourCount,
    /// (String, UInt64) series.
    TextCount,
    /// (Nullable(String), UInt64) series.
    OptTextCount,
    /// (Nullable(String), Nullable(String), UInt64) series.
    OptTextPairCount,
    /// (Nullable(String), UInt64, UInt64) series.
    OptTextCountCount,
    /// (String, UInt64, Float64) series.
    TextCountAmount,
    /// (date, UInt64, UInt64, UInt64) series with nullable aggregates.
    Funnel,
}

/// A dispatched metric query: fixed SQL text plus its result shape.
#[derive(Debug, Clone, Copy)]
pub struct MetricQuery {
    pub sql: &'static str,
    pub shape: ResultShape,
}

/// Returns the query for a metric. Total over the closed metric set.
pub fn dispatch(metric: MetricType) -> MetricQuery {
    match metric {
        MetricType::Dau => MetricQuery {
            sql: r"
                SELECT uniq(user_id)
                FROM user_events_storage
                WHERE toDate(timestamp) = today() AND event_type = 'user_login'
            ",
            shape: ResultShape::Count,
        },
        MetricType::Wau => MetricQuery {
            sql: r"
                SELECT uniq(user_id)
                FROM user_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY AND event_type = 'user_login'
            ",
            shape: ResultShape::Count,
        },
        MetricType::Mau => MetricQuery {
            sql: r"
                SELECT uniq(user_id)
                FROM user_events_storage
                WHERE timestamp >= now() - INTERVAL 30 DAY AND event_type = 'user_login'
            ",
            shape: ResultShape::Count,
        },
        MetricType::NewRegistrationsToday => MetricQuery {
            sql: r"
                SELECT count()
                FROM user_events_storage
                WHERE toDate(timestamp) = today() AND event_type = 'user_registered'
            ",
            shape: ResultShape::Count,
        },
        MetricType::DailyRevenue => MetricQuery {
            sql: r"
                SELECT toFloat64(sum(amount))
                FROM transaction_events_storage
                WHERE toDate(timestamp) = today()
            ",
            shape: ResultShape::Amount,
        },
        MetricType::AverageOrderValue => MetricQuery {
            sql: r"
                SELECT toFloat64(CASE WHEN count() > 0 THEN avg(amount) ELSE 0 END)
                FROM transaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
            ",
            shape: ResultShape::Amount,
        },
        MetricType::Arpu7Days => MetricQuery {
            sql: r"
                SELECT toFloat64(CASE WHEN uniq(user_id) > 0 THEN sum(amount) / uniq(user_id) ELSE 0 END)
                FROM transaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
            ",
            shape: ResultShape::Amount,
        },
        MetricType::TotalTransactionsToday => MetricQuery {
            sql: r"
                SELECT count()
                FROM transaction_events_storage
                WHERE toDate(timestamp) = today()
            ",
            shape: ResultShape::Count,
        },
        MetricType::RevenueTrend30Days => MetricQuery {
            sql: r"
                SELECT toString(toDate(timestamp)), toFloat64(sum(amount))
                FROM transaction_events_storage
                WHERE timestamp >= now() - INTERVAL 30 DAY
                GROUP BY toDate(timestamp) ORDER BY toDate(timestamp)
            ",
            shape: ResultShape::DateAmount,
        },
        MetricType::UserActivityTrend30Days => MetricQuery {
            sql: r"
                SELECT toString(toDate(timestamp)), uniq(user_id)
                FROM user_events_storage
                WHERE timestamp >= now() - INTERVAL 30 DAY AND event_type = 'user_login'
                GROUP BY toDate(timestamp) ORDER BY toDate(timestamp)
            ",
            shape: ResultShape::DateCount,
        },
        MetricType::TopPagesByViews => MetricQuery {
            sql: r"
                SELECT page, count()
                FROM interaction_events_storage
                WHERE event_type = 'page_view' AND timestamp >= now() - INTERVAL 7 DAY
                AND page IS NOT NULL
                GROUP BY page ORDER BY count() DESC LIMIT 10
            ",
            shape: ResultShape::OptTextCount,
        },
        MetricType::CartAbandonmentRate => MetricQuery {
            sql: r"
                WITH
                    cart_users AS (SELECT uniq(user_id) AS users FROM interaction_events_storage WHERE event_type = 'item_added_to_cart' AND timestamp >= now() - INTERVAL 7 DAY),
                    purchase_users AS (SELECT uniq(user_id) AS users FROM transaction_events_storage WHERE timestamp >= now() - INTERVAL 7 DAY)
                SELECT toFloat64(CASE WHEN cart_users.users > 0 THEN round((1 - purchase_users.users / cart_users.users) * 100, 2) ELSE 0 END)
                FROM cart_users, purchase_users
            ",
            shape: ResultShape::Amount,
        },
        MetricType::SearchQueries => MetricQuery {
            sql: r"
                SELECT query, count()
                FROM interaction_events_storage
                WHERE event_type = 'search' AND timestamp >= now() - INTERVAL 7 DAY
                AND query IS NOT NULL
                GROUP BY query ORDER BY count() DESC LIMIT 10
            ",
            shape: ResultShape::OptTextCount,
        },
        MetricType::UserJourneyFunnel => MetricQuery {
            sql: r"
                SELECT toString(toDate(timestamp)),
                       uniq(CASE WHEN event_type = 'page_view' THEN user_id END),
                       uniq(CASE WHEN event_type = 'item_added_to_cart' THEN user_id END),
                       uniq(CASE WHEN event_type = 'search' THEN user_id END)
                FROM interaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
                GROUP BY toDate(timestamp) ORDER BY toDate(timestamp)
            ",
            shape: ResultShape::Funnel,
        },
        MetricType::TransactionVolumeByCurrency => MetricQuery {
            sql: r"
                SELECT currency, count(), toFloat64(sum(amount))
                FROM transaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
                GROUP BY currency ORDER BY count() DESC
            ",
            shape: ResultShape::TextCountAmount,
        },
        MetricType::MostClickedElements => MetricQuery {
            sql: r"
                SELECT element_name, count()
                FROM interaction_events_storage
                WHERE event_type = 'element_click' AND timestamp >= now() - INTERVAL 7 DAY
                AND element_name IS NOT NULL
                GROUP BY element_name ORDER BY count() DESC LIMIT 10
            ",
            shape: ResultShape::OptTextCount,
        },
        MetricType::UserRegistrationTrend => MetricQuery {
            sql: r"
                SELECT toString(toDate(timestamp)), count()
                FROM user_events_storage
                WHERE event_type = 'user_registered' AND timestamp >= now() - INTERVAL 30 DAY
                GROUP BY toDate(timestamp) ORDER BY toDate(timestamp)
            ",
            shape: ResultShape::DateCount,
        },
        MetricType::FilterUsage => MetricQuery {
            sql: r"
                SELECT filter_name, filter_value, count()
                FROM interaction_events_storage
                WHERE event_type = 'filter_applied' AND timestamp >= now() - INTERVAL 7 DAY
                AND filter_name IS NOT NULL
                GROUP BY filter_name, filter_value ORDER BY count() DESC LIMIT 15
            ",
            shape: ResultShape::OptTextPairCount,
        },
        MetricType::ConversionRateCartToPurchase => MetricQuery {
            sql: r"
                WITH
                    transactions_count AS (SELECT count() AS cnt FROM transaction_events_storage WHERE timestamp >= now() - INTERVAL 7 DAY),
                    cart_users_count AS (SELECT uniq(user_id) AS cnt FROM interaction_events_storage WHERE event_type = 'item_added_to_cart' AND timestamp >= now() - INTERVAL 7 DAY)
                SELECT toFloat64(CASE WHEN cart_users_count.cnt > 0 THEN round(transactions_count.cnt * 100.0 / cart_users_count.cnt, 2) ELSE 0 END)
                FROM transactions_count, cart_users_count
            ",
            shape: ResultShape::Amount,
        },
        MetricType::UserEngagementScore => MetricQuery {
            sql: r"
                SELECT toFloat64(CASE WHEN uniq(user_id) > 0 THEN round(count() * 1.0 / uniq(user_id), 2) ELSE 0 END)
                FROM interaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
            ",
            shape: ResultShape::Amount,
        },
        MetricType::MostActiveEventType => MetricQuery {
            sql: r"
                SELECT event_type
                FROM interaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
                GROUP BY event_type ORDER BY count() DESC LIMIT 1
            ",
            shape: ResultShape::Label,
        },
        MetricType::TotalPageViews => MetricQuery {
            sql: r"
                SELECT count()
                FROM interaction_events_storage
                WHERE event_type = 'page_view' AND timestamp >= now() - INTERVAL 7 DAY
            ",
            shape: ResultShape::Count,
        },
        MetricType::TopPerformingProducts => MetricQuery {
            sql: r"
                SELECT item_id, count(), uniq(user_id)
                FROM interaction_events_storage
                WHERE event_type = 'item_added_to_cart' AND timestamp >= now() - INTERVAL 7 DAY
                GROUP BY item_id ORDER BY count() DESC LIMIT 10
            ",
            shape: ResultShape::OptTextCountCount,
        },
        MetricType::ActivityByHour => MetricQuery {
            sql: r"
                SELECT toHour(timestamp), count()
                FROM interaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
                GROUP BY toHour(timestamp) ORDER BY toHour(timestamp)
            ",
            shape: ResultShape::HourCount,
        },
        MetricType::EventTypeDistribution => MetricQuery {
            sql: r"
                SELECT event_type, count()
                FROM interaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
                GROUP BY event_type ORDER BY count() DESC
            ",
            shape: ResultShape::TextCount,
        },
        MetricType::DailyActivityTrend => MetricQuery {
            sql: r"
                SELECT toString(toDate(timestamp)), count()
                FROM interaction_events_storage
                WHERE timestamp >= now() - INTERVAL 7 DAY
                GROUP BY toDate(timestamp) ORDER BY toDate(timestamp)
            ",
            shape: ResultShape::DateCount,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_metric_has_a_query() {
        for metric in MetricType::ALL {
            let query = dispatch(metric);
            assert!(
                !query.sql.trim().is_empty(),
                "{} must dispatch to a query",
                metric
            );
            assert!(
                query.sql.contains("_storage"),
                "{} must aggregate a stream storage table",
                metric
            );
        }
    }

    #[test]
    fn test_queries_target_expected_tables() {
        assert!(dispatch(MetricType::Dau).sql.contains("user_events_storage"));
        assert!(dispatch(MetricType::DailyRevenue)
            .sql
            .contains("transaction_events_storage"));
        assert!(dispatch(MetricType::TopPagesByViews)
            .sql
            .contains("interaction_events_storage"));
        // Cart abandonment joins interaction and transaction activity.
        let cart = dispatch(MetricType::CartAbandonmentRate).sql;
        assert!(cart.contains("interaction_events_storage"));
        assert!(cart.contains("transaction_events_storage"));
    }

    #[test]
    fn test_recency_windows() {
        assert!(dispatch(MetricType::Dau).sql.contains("today()"));
        assert!(dispatch(MetricType::Wau).sql.contains("INTERVAL 7 DAY"));
        assert!(dispatch(MetricType::Mau).sql.contains("INTERVAL 30 DAY"));
        assert!(dispatch(MetricType::RevenueTrend30Days)
            .sql
            .contains("INTERVAL 30 DAY"));
    }

    #[test]
    fn test_series_queries_carry_their_own_ordering() {
        for metric in [
            MetricType::RevenueTrend30Days,
            MetricType::UserActivityTrend30Days,
            MetricType::TopPagesByViews,
            MetricType::SearchQueries,
            MetricType::UserJourneyFunnel,
            MetricType::TransactionVolumeByCurrency,
            MetricType::MostClickedElements,
            MetricType::UserRegistrationTrend,
            MetricType::FilterUsage,
            MetricType::TopPerformingProducts,
            MetricType::ActivityByHour,
            MetricType::EventTypeDistribution,
            MetricType::DailyActivityTrend,
        ] {
            assert!(
                dispatch(metric).sql.contains("ORDER BY"),
                "{} must order its rows",
                metric
            );
        }
    }
}
