//! ClickHouse health checks and schema bootstrap.

use tracing::{debug, error};

use crate::client::ClickHouseClient;
use crate::schema::all_ddl;

/// Check ClickHouse connection health.
pub async fn check_connection(client: &ClickHouseClient) -> bool {
    match client.inner().query("SELECT 1").fetch_one::<u8>().await {
        Ok(_) => {
            debug!("ClickHouse connection healthy");
            true
        }
        Err(e) => {
            error!("ClickHouse health check failed: {}", e);
            false
        }
    }
}

/// Initialize database schema (idempotent).
pub async fn init_schema(client: &ClickHouseClient, brokers: &str) -> Result<(), String> {
    for ddl in all_ddl(brokers) {
        client
            .inner()
            .query(&ddl)
            .execute()
            .await
            .map_err(|e| format!("Failed to execute DDL: {}", e))?;
    }

    debug!("ClickHouse schema initialized");
    Ok(())
}
