//! Test application setup.

use std::sync::Arc;

use api::{router, AppState};
use axum_test::TestServer;

use crate::mocks::{MockMetricStore, MockPublisher};

/// A test application wired to in-memory mocks.
pub struct TestContext {
    pub server: TestServer,
    pub publisher: Arc<MockPublisher>,
    pub store: Arc<MockMetricStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let publisher = Arc::new(MockPublisher::new());
        let store = Arc::new(MockMetricStore::new());

        let state = AppState::new(publisher.clone(), store.clone());
        let server = TestServer::new(router(state)).expect("Failed to create test server");

        Self {
            server,
            publisher,
            store,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
