//! Event type definitions for the analytics pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Target stream for a routed event.
///
/// Streams are Kafka topics consumed by the columnar store; the set is
/// closed and the names are part of the persisted schema boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    UserEvents,
    TransactionEvents,
    InteractionEvents,
}

impl Stream {
    /// All streams, for topic provisioning.
    pub const ALL: [Stream; 3] = [
        Stream::UserEvents,
        Stream::TransactionEvents,
        Stream::InteractionEvents,
    ];

    /// Returns the topic name for this stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserEvents => "user_events",
            Self::TransactionEvents => "transaction_events",
            Self::InteractionEvents => "interaction_events",
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    pub transaction_id: String,
    /// Monetary amount, two fractional digits on the wire.
    pub amount: f64,
    pub currency: String,
}

/// Element click event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementClickData {
    pub element_name: String,
    pub page: Option<String>,
}

/// Search event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchData {
    pub query: String,
}

/// Page view event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageViewData {
    pub page: String,
}

/// Form submit event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmitData {
    pub form_name: String,
}

/// Cart item data, shared by the add and remove variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemData {
    pub item_id: String,
}

/// Filter applied event data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterAppliedData {
    pub filter_name: String,
    pub filter_value: String,
    pub page: String,
}

/// Event payload variants.
///
/// The set is closed; the router and the payload builder both match on it
/// exhaustively, so adding a variant is a compile-time obligation at every
/// dispatch site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventKind {
    UserRegistered,
    UserLogin,
    Transaction(TransactionData),
    ElementClick(ElementClickData),
    Search(SearchData),
    PageView(PageViewData),
    FormSubmit(FormSubmitData),
    ItemAddedToCart(CartItemData),
    ItemRemovedFromCart(CartItemData),
    FilterApplied(FilterAppliedData),
}

impl EventKind {
    /// Returns the event type discriminator as a string.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::UserRegistered => "user_registered",
            Self::UserLogin => "user_login",
            Self::Transaction(_) => "transaction",
            Self::ElementClick(_) => "element_click",
            Self::Search(_) => "search",
            Self::PageView(_) => "page_view",
            Self::FormSubmit(_) => "form_submit",
            Self::ItemAddedToCart(_) => "item_added_to_cart",
            Self::ItemRemovedFromCart(_) => "item_removed_from_cart",
            Self::FilterApplied(_) => "filter_applied",
        }
    }

    /// Returns the target stream for this event kind.
    pub fn stream(&self) -> Stream {
        match self {
            Self::UserRegistered | Self::UserLogin => Stream::UserEvents,
            Self::Transaction(_) => Stream::TransactionEvents,
            Self::ElementClick(_)
            | Self::Search(_)
            | Self::PageView(_)
            | Self::FormSubmit(_)
            | Self::ItemAddedToCart(_)
            | Self::ItemRemovedFromCart(_)
            | Self::FilterApplied(_) => Stream::InteractionEvents,
        }
    }
}

/// A single analytics event.
///
/// Created at the request boundary, consumed once by the router, then
/// discarded; nothing is persisted inside this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    pub fn new(user_id: impl Into<String>, timestamp: DateTime<Utc>, kind: EventKind) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp,
            kind,
        }
    }
}
