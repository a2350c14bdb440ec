//! ClickHouse table schemas for the three event streams.
//!
//! Each stream has a Kafka-engine raw table (the store consumes the topic
//! itself), a MergeTree storage table the dashboard queries read, and a
//! materialized view piping raw rows into storage. Payload field names in
//! the router must match these columns byte-for-byte.

/// SQL for creating the database.
pub const CREATE_DATABASE: &str = "CREATE DATABASE IF NOT EXISTS analytics";

/// Raw Kafka-engine table for the user events stream.
pub fn create_user_events_raw(brokers: &str) -> String {
    format!(
        r"
CREATE TABLE IF NOT EXISTS analytics.user_events (
    event_type String,
    user_id String,
    timestamp DateTime64(3)
) ENGINE = Kafka()
SETTINGS
    kafka_broker_list = '{brokers}',
    kafka_topic_list = 'user_events',
    kafka_group_name = 'clickhouse_user_consumer',
    kafka_format = 'JSONEachRow',
    kafka_max_block_size = 1048576
"
    )
}

/// Raw Kafka-engine table for the transaction events stream.
pub fn create_transaction_events_raw(brokers: &str) -> String {
    format!(
        r"
CREATE TABLE IF NOT EXISTS analytics.transaction_events (
    event_type String,
    user_id String,
    transaction_id String,
    amount Decimal64(2),
    currency String,
    timestamp DateTime64(3)
) ENGINE = Kafka()
SETTINGS
    kafka_broker_list = '{brokers}',
    kafka_topic_list = 'transaction_events',
    kafka_group_name = 'clickhouse_transaction_consumer',
    kafka_format = 'JSONEachRow',
    kafka_max_block_size = 1048576
"
    )
}

/// Raw Kafka-engine table for the interaction events stream.
pub fn create_interaction_events_raw(brokers: &str) -> String {
    format!(
        r"
CREATE TABLE IF NOT EXISTS analytics.interaction_events (
    event_type String,
    user_id String,
    element_name Nullable(String),
    page Nullable(String),
    query Nullable(String),
    form_name Nullable(String),
    item_id Nullable(String),
    filter_name Nullable(String),
    filter_value Nullable(String),
    timestamp DateTime64(3)
) ENGINE = Kafka()
SETTINGS
    kafka_broker_list = '{brokers}',
    kafka_topic_list = 'interaction_events',
    kafka_group_name = 'clickhouse_interaction_consumer',
    kafka_format = 'JSONEachRow',
    kafka_max_block_size = 1048576
"
    )
}

/// Storage table the user metrics aggregate over.
pub const CREATE_USER_EVENTS_STORAGE: &str = r"
CREATE TABLE IF NOT EXISTS analytics.user_events_storage (
    event_type String,
    user_id String,
    timestamp DateTime64(3)
) ENGINE = MergeTree()
ORDER BY (timestamp, user_id)
";

/// Storage table the transaction metrics aggregate over.
pub const CREATE_TRANSACTION_EVENTS_STORAGE: &str = r"
CREATE TABLE IF NOT EXISTS analytics.transaction_events_storage (
    event_type String,
    user_id String,
    transaction_id String,
    amount Decimal64(2),
    currency String,
    timestamp DateTime64(3)
) ENGINE = MergeTree()
ORDER BY (timestamp, user_id)
";

/// Storage table the interaction metrics aggregate over.
pub const CREATE_INTERACTION_EVENTS_STORAGE: &str = r"
CREATE TABLE IF NOT EXISTS analytics.interaction_events_storage (
    event_type String,
    user_id String,
    element_name Nullable(String),
    page Nullable(String),
    query Nullable(String),
    form_name Nullable(String),
    item_id Nullable(String),
    filter_name Nullable(String),
    filter_value Nullable(String),
    timestamp DateTime64(3)
) ENGINE = MergeTree()
ORDER BY (timestamp, user_id, event_type)
";

/// Materialized views moving raw stream rows into storage.
pub const CREATE_CONSUMER_VIEWS: [&str; 3] = [
    r"
CREATE MATERIALIZED VIEW IF NOT EXISTS analytics.user_events_consumer TO analytics.user_events_storage AS
SELECT event_type, user_id, timestamp FROM analytics.user_events
",
    r"
CREATE MATERIALIZED VIEW IF NOT EXISTS analytics.transaction_events_consumer TO analytics.transaction_events_storage AS
SELECT event_type, user_id, transaction_id, amount, currency, timestamp FROM analytics.transaction_events
",
    r"
CREATE MATERIALIZED VIEW IF NOT EXISTS analytics.interaction_events_consumer TO analytics.interaction_events_storage AS
SELECT event_type, user_id, element_name, page, query, form_name, item_id, filter_name, filter_value, timestamp FROM analytics.interaction_events
",
];

/// All DDL statements in dependency order.
pub fn all_ddl(brokers: &str) -> Vec<String> {
    let mut ddl = vec![
        CREATE_DATABASE.to_string(),
        create_user_events_raw(brokers),
        create_transaction_events_raw(brokers),
        create_interaction_events_raw(brokers),
        CREATE_USER_EVENTS_STORAGE.to_string(),
        CREATE_TRANSACTION_EVENTS_STORAGE.to_string(),
        CREATE_INTERACTION_EVENTS_STORAGE.to_string(),
    ];
    ddl.extend(CREATE_CONSUMER_VIEWS.iter().map(|v| v.to_string()));
    ddl
}
