//! Metric taxonomy and typed query results for the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of dashboard metrics.
///
/// Declaration order is iteration order: `ALL` and the `Ord` impl both
/// follow it, so a dashboard response lists metrics in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    #[serde(rename = "daily_active_users")]
    Dau,
    #[serde(rename = "weekly_active_users")]
    Wau,
    #[serde(rename = "monthly_active_users")]
    Mau,
    NewRegistrationsToday,
    DailyRevenue,
    AverageOrderValue,
    #[serde(rename = "arpu_7_days")]
    Arpu7Days,
    TotalTransactionsToday,
    #[serde(rename = "revenue_trend_30_days")]
    RevenueTrend30Days,
    #[serde(rename = "user_activity_trend_30_days")]
    UserActivityTrend30Days,
    TopPagesByViews,
    CartAbandonmentRate,
    SearchQueries,
    UserJourneyFunnel,
    TransactionVolumeByCurrency,
    MostClickedElements,
    UserRegistrationTrend,
    FilterUsage,
    ConversionRateCartToPurchase,
    UserEngagementScore,
    MostActiveEventType,
    TotalPageViews,
    TopPerformingProducts,
    ActivityByHour,
    EventTypeDistribution,
    DailyActivityTrend,
}

impl MetricType {
    /// Every metric, in declaration order.
    pub const ALL: [MetricType; 26] = [
        MetricType::Dau,
        MetricType::Wau,
        MetricType::Mau,
        MetricType::NewRegistrationsToday,
        MetricType::DailyRevenue,
        MetricType::AverageOrderValue,
        MetricType::Arpu7Days,
        MetricType::TotalTransactionsToday,
        MetricType::RevenueTrend30Days,
        MetricType::UserActivityTrend30Days,
        MetricType::TopPagesByViews,
        MetricType::CartAbandonmentRate,
        MetricType::SearchQueries,
        MetricType::UserJourneyFunnel,
        MetricType::TransactionVolumeByCurrency,
        MetricType::MostClickedElements,
        MetricType::UserRegistrationTrend,
        MetricType::FilterUsage,
        MetricType::ConversionRateCartToPurchase,
        MetricType::UserEngagementScore,
        MetricType::MostActiveEventType,
        MetricType::TotalPageViews,
        MetricType::TopPerformingProducts,
        MetricType::ActivityByHour,
        MetricType::EventTypeDistribution,
        MetricType::DailyActivityTrend,
    ];

    /// Returns the wire identifier for this metric.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dau => "daily_active_users",
            Self::Wau => "weekly_active_users",
            Self::Mau => "monthly_active_users",
            Self::NewRegistrationsToday => "new_registrations_today",
            Self::DailyRevenue => "daily_revenue",
            Self::AverageOrderValue => "average_order_value",
            Self::Arpu7Days => "arpu_7_days",
            Self::TotalTransactionsToday => "total_transactions_today",
            Self::RevenueTrend30Days => "revenue_trend_30_days",
            Self::UserActivityTrend30Days => "user_activity_trend_30_days",
            Self::TopPagesByViews => "top_pages_by_views",
            Self::CartAbandonmentRate => "cart_abandonment_rate",
            Self::SearchQueries => "search_queries",
            Self::UserJourneyFunnel => "user_journey_funnel",
            Self::TransactionVolumeByCurrency => "transaction_volume_by_currency",
            Self::MostClickedElements => "most_clicked_elements",
            Self::UserRegistrationTrend => "user_registration_trend",
            Self::FilterUsage => "filter_usage",
            Self::ConversionRateCartToPurchase => "conversion_rate_cart_to_purchase",
            Self::UserEngagementScore => "user_engagement_score",
            Self::MostActiveEventType => "most_active_event_type",
            Self::TotalPageViews => "total_page_views",
            Self::TopPerformingProducts => "top_performing_products",
            Self::ActivityByHour => "activity_by_hour",
            Self::EventTypeDistribution => "event_type_distribution",
            Self::DailyActivityTrend => "daily_activity_trend",
        }
    }
}

impl std::str::FromStr for MetricType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::UnsupportedMetric(s.to_string()))
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar count result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountValue {
    pub value: u64,
}

/// Scalar amount/ratio result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountValue {
    pub value: f64,
}

/// Scalar label result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelValue {
    pub value: String,
}

/// An ordered series of points, serialized as `{"points": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Points<T> {
    pub points: Vec<T>,
}

/// An ordered table of rows, serialized as `{"rows": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRows<T> {
    pub rows: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivityPoint {
    pub date: NaiveDate,
    pub active_users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPoint {
    pub date: NaiveDate,
    pub registrations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub time: NaiveDate,
    pub events: u64,
}

/// One day of the user journey funnel. Null aggregate columns are
/// coalesced to zero during parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelPoint {
    pub time: NaiveDate,
    pub page_views: u64,
    pub cart_additions: u64,
    pub searches: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageViewRow {
    pub page: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQueryRow {
    pub query: String,
    pub search_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickedElementRow {
    pub element_name: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterUsageRow {
    pub filter_name: String,
    pub filter_value: String,
    pub usage_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub product_id: String,
    pub cart_additions: u64,
    pub unique_users: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyActivityRow {
    pub hour: u8,
    pub events: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDistributionRow {
    pub event_type: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyVolumeRow {
    pub currency: String,
    pub transactions: u64,
    pub total_amount: f64,
}

/// Typed metric result, one variant per [`MetricType`].
///
/// Serialized untagged: a scalar metric becomes `{"value": ...}`, a series
/// becomes `{"points": [...]}` or `{"rows": [...]}` - the dashboard response
/// keys carry the metric identifier, so the value needs no tag of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricResult {
    Dau(CountValue),
    Wau(CountValue),
    Mau(CountValue),
    NewRegistrationsToday(CountValue),
    DailyRevenue(AmountValue),
    AverageOrderValue(AmountValue),
    Arpu7Days(AmountValue),
    TotalTransactionsToday(CountValue),
    RevenueTrend30Days(Points<RevenuePoint>),
    UserActivityTrend30Days(Points<UserActivityPoint>),
    TopPagesByViews(TableRows<PageViewRow>),
    CartAbandonmentRate(AmountValue),
    SearchQueries(TableRows<SearchQueryRow>),
    UserJourneyFunnel(Points<FunnelPoint>),
    TransactionVolumeByCurrency(TableRows<CurrencyVolumeRow>),
    MostClickedElements(TableRows<ClickedElementRow>),
    UserRegistrationTrend(Points<RegistrationPoint>),
    FilterUsage(TableRows<FilterUsageRow>),
    ConversionRateCartToPurchase(AmountValue),
    UserEngagementScore(AmountValue),
    MostActiveEventType(LabelValue),
    TotalPageViews(CountValue),
    TopPerformingProducts(TableRows<ProductRow>),
    ActivityByHour(TableRows<HourlyActivityRow>),
    EventTypeDistribution(TableRows<EventDistributionRow>),
    DailyActivityTrend(Points<ActivityPoint>),
}

impl MetricResult {
    /// Returns the metric this result belongs to.
    pub fn metric_type(&self) -> MetricType {
        match self {
            Self::Dau(_) => MetricType::Dau,
            Self::Wau(_) => MetricType::Wau,
            Self::Mau(_) => MetricType::Mau,
            Self::NewRegistrationsToday(_) => MetricType::NewRegistrationsToday,
            Self::DailyRevenue(_) => MetricType::DailyRevenue,
            Self::AverageOrderValue(_) => MetricType::AverageOrderValue,
            Self::Arpu7Days(_) => MetricType::Arpu7Days,
            Self::TotalTransactionsToday(_) => MetricType::TotalTransactionsToday,
            Self::RevenueTrend30Days(_) => MetricType::RevenueTrend30Days,
            Self::UserActivityTrend30Days(_) => MetricType::UserActivityTrend30Days,
            Self::TopPagesByViews(_) => MetricType::TopPagesByViews,
            Self::CartAbandonmentRate(_) => MetricType::CartAbandonmentRate,
            Self::SearchQueries(_) => MetricType::SearchQueries,
            Self::UserJourneyFunnel(_) => MetricType::UserJourneyFunnel,
            Self::TransactionVolumeByCurrency(_) => MetricType::TransactionVolumeByCurrency,
            Self::MostClickedElements(_) => MetricType::MostClickedElements,
            Self::UserRegistrationTrend(_) => MetricType::UserRegistrationTrend,
            Self::FilterUsage(_) => MetricType::FilterUsage,
            Self::ConversionRateCartToPurchase(_) => MetricType::ConversionRateCartToPurchase,
            Self::UserEngagementScore(_) => MetricType::UserEngagementScore,
            Self::MostActiveEventType(_) => MetricType::MostActiveEventType,
            Self::TotalPageViews(_) => MetricType::TotalPageViews,
            Self::TopPerformingProducts(_) => MetricType::TopPerformingProducts,
            Self::ActivityByHour(_) => MetricType::ActivityByHour,
            Self::EventTypeDistribution(_) => MetricType::EventTypeDistribution,
            Self::DailyActivityTrend(_) => MetricType::DailyActivityTrend,
        }
    }
}
