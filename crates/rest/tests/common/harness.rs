//! REST API test harness.
//!
//! Builds the full application over a seeded in-memory store.

use std::sync::Arc;

use axum_test::TestServer;
use hms_persistence::backends::memory::MemoryBackend;
use hms_persistence::repository::EntityRepository;

use hms_rest::{ServerConfig, create_app_with_shared};

/// A test server together with the store behind it.
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The store backing the server.
    pub backend: Arc<MemoryBackend>,
}

impl RestTestHarness {
    /// Creates a harness over a freshly seeded store.
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::for_testing()).await
    }

    /// Creates a harness with a custom configuration.
    pub async fn with_config(config: ServerConfig) -> Self {
        let backend = Arc::new(MemoryBackend::new());
        EntityRepository::new(Arc::clone(&backend))
            .seed()
            .await
            .expect("Failed to seed store");

        let app = create_app_with_shared(Arc::clone(&backend), config);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Posts a form and returns the response text after asserting 200.
    pub async fn create_ok(&self, path: &str, fields: &[(&str, &str)]) -> String {
        let response = self.server.post(path).form(&fields).await;
        response.assert_status_ok();
        response.text()
    }
}

/// A complete hospital form.
pub const ST_MARY: &[(&str, &str)] = &[
    ("name", "St. Mary"),
    ("address", "1 Main St"),
    ("phone", "555-0100"),
    ("beds_number", "120"),
];

/// A complete patient form.
pub const JANE_DOE: &[(&str, &str)] = &[
    ("surname", "Doe"),
    ("born_date", "1990-04-12"),
    ("sex", "F"),
    ("mpn", "MPN-1"),
];
