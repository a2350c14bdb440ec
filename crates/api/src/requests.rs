//! Inbound event request bodies.
//!
//! One body type per event endpoint. Field-level validation lives here, at
//! the transport boundary; the typed [`Event`] built afterwards is taken at
//! face value by the router.

use analytics_core::{
    CartItemData, ElementClickData, Event, EventKind, FilterAppliedData, FormSubmitData,
    PageViewData, SearchData, TransactionData,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UserRegisteredRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

impl UserRegisteredRequest {
    pub fn into_event(self) -> Event {
        Event::new(self.user_id, self.timestamp, EventKind::UserRegistered)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserLoginRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

impl UserLoginRequest {
    pub fn into_event(self) -> Event {
        Event::new(self.user_id, self.timestamp, EventKind::UserLogin)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransactionRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 128))]
    pub transaction_id: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 3, max = 3))]
    pub currency: String,
}

impl TransactionRequest {
    pub fn into_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::Transaction(TransactionData {
                transaction_id: self.transaction_id,
                amount: self.amount,
                currency: self.currency,
            }),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ElementClickRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 256))]
    pub element_name: String,
    #[validate(length(max = 2000))]
    pub page: Option<String>,
}

impl ElementClickRequest {
    pub fn into_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::ElementClick(ElementClickData {
                element_name: self.element_name,
                page: self.page,
            }),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 1000))]
    pub query: String,
}

impl SearchRequest {
    pub fn into_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::Search(SearchData { query: self.query }),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PageViewRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 2000))]
    pub page: String,
}

impl PageViewRequest {
    pub fn into_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::PageView(PageViewData { page: self.page }),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct FormSubmitRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 256))]
    pub form_name: String,
}

impl FormSubmitRequest {
    pub fn into_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::FormSubmit(FormSubmitData {
                form_name: self.form_name,
            }),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CartItemRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 128))]
    pub item_id: String,
}

impl CartItemRequest {
    pub fn into_added_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::ItemAddedToCart(CartItemData {
                item_id: self.item_id,
            }),
        )
    }

    pub fn into_removed_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::ItemRemovedFromCart(CartItemData {
                item_id: self.item_id,
            }),
        )
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct FilterAppliedRequest {
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[validate(length(min = 1, max = 256))]
    pub filter_name: String,
    #[validate(length(min = 1, max = 256))]
    pub filter_value: String,
    #[validate(length(min = 1, max = 2000))]
    pub page: String,
}

impl FilterAppliedRequest {
    pub fn into_event(self) -> Event {
        Event::new(
            self.user_id,
            self.timestamp,
            EventKind::FilterApplied(FilterAppliedData {
                filter_name: self.filter_name,
                filter_value: self.filter_value,
                page: self.page,
            }),
        )
    }
}
