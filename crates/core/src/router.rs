//! Stream routing: turns a typed event into a (stream, payload) pair.

use serde_json::{json, Map, Value};

use crate::events::{Event, EventKind, Stream};

/// Timestamp format used on the wire, second granularity.
///
/// Sub-second precision is dropped deliberately; the storage schema keeps
/// milliseconds but the pipeline truncates at the boundary.
pub const PAYLOAD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat key-value payload published to a stream, serialized as one JSON
/// object per event (JSONEachRow on the consuming side).
pub type StreamPayload = Map<String, Value>;

/// Routes an event to its target stream and builds the wire payload.
///
/// The payload carries `user_id`, the truncated `timestamp`, the variant's
/// fields flattened, and the `event_type` discriminator. The discriminator
/// is inserted last so it can never be shadowed by a variant field of the
/// same name.
pub fn route(event: &Event) -> (Stream, StreamPayload) {
    let mut payload = StreamPayload::new();
    payload.insert("user_id".into(), json!(event.user_id));
    payload.insert(
        "timestamp".into(),
        json!(event.timestamp.format(PAYLOAD_TIMESTAMP_FORMAT).to_string()),
    );

    match &event.kind {
        EventKind::UserRegistered | EventKind::UserLogin => {}
        EventKind::Transaction(tx) => {
            payload.insert("transaction_id".into(), json!(tx.transaction_id));
            payload.insert("amount".into(), json!(tx.amount));
            payload.insert("currency".into(), json!(tx.currency));
        }
        EventKind::ElementClick(click) => {
            payload.insert("element_name".into(), json!(click.element_name));
            payload.insert("page".into(), json!(click.page));
        }
        EventKind::Search(search) => {
            payload.insert("query".into(), json!(search.query));
        }
        EventKind::PageView(view) => {
            payload.insert("page".into(), json!(view.page));
        }
        EventKind::FormSubmit(form) => {
            payload.insert("form_name".into(), json!(form.form_name));
        }
        EventKind::ItemAddedToCart(item) | EventKind::ItemRemovedFromCart(item) => {
            payload.insert("item_id".into(), json!(item.item_id));
        }
        EventKind::FilterApplied(filter) => {
            payload.insert("filter_name".into(), json!(filter.filter_name));
            payload.insert("filter_value".into(), json!(filter.filter_value));
            payload.insert("page".into(), json!(filter.page));
        }
    }

    payload.insert("event_type".into(), json!(event.kind.event_type()));

    (event.kind.stream(), payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::*;
    use chrono::{TimeZone, Utc};

    fn at(ts: &str) -> chrono::DateTime<Utc> {
        ts.parse().unwrap()
    }

    #[test]
    fn test_every_variant_routes_with_discriminator() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 10, 30, 45).unwrap();
        let cases = [
            (EventKind::UserRegistered, "user_registered", Stream::UserEvents),
            (EventKind::UserLogin, "user_login", Stream::UserEvents),
            (
                EventKind::Transaction(TransactionData {
                    transaction_id: "t-1".into(),
                    amount: 10.0,
                    currency: "EUR".into(),
                }),
                "transaction",
                Stream::TransactionEvents,
            ),
            (
                EventKind::ElementClick(ElementClickData {
                    element_name: "buy".into(),
                    page: Some("/".into()),
                }),
                "element_click",
                Stream::InteractionEvents,
            ),
            (
                EventKind::Search(SearchData { query: "q".into() }),
                "search",
                Stream::InteractionEvents,
            ),
            (
                EventKind::PageView(PageViewData { page: "/".into() }),
                "page_view",
                Stream::InteractionEvents,
            ),
            (
                EventKind::FormSubmit(FormSubmitData {
                    form_name: "signup".into(),
                }),
                "form_submit",
                Stream::InteractionEvents,
            ),
            (
                EventKind::ItemAddedToCart(CartItemData { item_id: "i".into() }),
                "item_added_to_cart",
                Stream::InteractionEvents,
            ),
            (
                EventKind::ItemRemovedFromCart(CartItemData { item_id: "i".into() }),
                "item_removed_from_cart",
                Stream::InteractionEvents,
            ),
            (
                EventKind::FilterApplied(FilterAppliedData {
                    filter_name: "color".into(),
                    filter_value: "red".into(),
                    page: "/catalog".into(),
                }),
                "filter_applied",
                Stream::InteractionEvents,
            ),
        ];

        for (kind, discriminator, expected_stream) in cases {
            let (stream, payload) = route(&Event::new("u1", ts, kind));
            assert_eq!(stream, expected_stream, "{}", discriminator);
            assert_eq!(payload["event_type"], discriminator);
            assert_eq!(payload["user_id"], "u1");
            assert_eq!(payload["timestamp"], "2025-01-01 10:30:45");
        }
    }

    #[test]
    fn test_transaction_payload_shape() {
        let event = Event::new(
            "u1",
            at("2025-01-01T10:30:45Z"),
            EventKind::Transaction(TransactionData {
                transaction_id: "tx-42".into(),
                amount: 19.99,
                currency: "USD".into(),
            }),
        );

        let (stream, payload) = route(&event);
        assert_eq!(stream, Stream::TransactionEvents);
        assert_eq!(payload["transaction_id"], "tx-42");
        assert_eq!(payload["amount"], serde_json::json!(19.99));
        assert!(payload["amount"].is_number(), "amount must stay numeric");
        assert_eq!(payload["currency"], "USD");
        assert_eq!(payload["event_type"], "transaction");
    }

    #[test]
    fn test_timestamp_truncated_to_seconds() {
        let event = Event::new(
            "u1",
            at("2025-01-01T10:30:45.123Z"),
            EventKind::PageView(PageViewData { page: "/home".into() }),
        );

        let (_, payload) = route(&event);
        assert_eq!(payload["timestamp"], "2025-01-01 10:30:45");
    }

    #[test]
    fn test_missing_click_page_serializes_as_null() {
        let event = Event::new(
            "u1",
            at("2025-01-01T00:00:00Z"),
            EventKind::ElementClick(ElementClickData {
                element_name: "cta".into(),
                page: None,
            }),
        );

        let (_, payload) = route(&event);
        assert!(payload["page"].is_null());
        assert_eq!(payload["element_name"], "cta");
    }

    #[test]
    fn test_discriminator_is_last_assigned() {
        // A hand-built payload collision cannot survive routing: event_type
        // is written after every variant field.
        let event = Event::new(
            "u1",
            at("2025-01-01T00:00:00Z"),
            EventKind::Search(SearchData { query: "q".into() }),
        );
        let (_, payload) = route(&event);
        let keys: Vec<&String> = payload.keys().collect();
        assert_eq!(payload["event_type"], "search");
        assert!(keys.contains(&&"event_type".to_string()));
    }
}
