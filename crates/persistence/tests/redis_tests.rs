//! Redis backend integration tests.
//!
//! Tests that need a server use testcontainers to start a Redis instance in
//! Docker. Each test works in its own logical database so they can share one
//! container.
//!
//! Run with: `cargo test -p hms-persistence --features redis -- redis`

#![cfg(feature = "redis")]

mod common;

use hms_persistence::backends::redis::{RedisBackend, RedisBackendConfig};
use hms_persistence::core::{BackendKind, KeyValueStore};

// ============================================================================
// Backend Configuration Tests (no Redis instance required)
// ============================================================================

#[test]
fn test_redis_config_defaults() {
    let config = RedisBackendConfig::default();
    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 6379);
    assert_eq!(config.db, 0);
    assert_eq!(config.max_connections, 16);
    assert_eq!(config.connection_timeout_ms, 2000);
}

#[test]
fn test_redis_config_deserializes_with_defaults() {
    let config: RedisBackendConfig = serde_json::from_str(r#"{"host": "cache", "db": 3}"#).unwrap();
    assert_eq!(config.host, "cache");
    assert_eq!(config.port, 6379);
    assert_eq!(config.db, 3);
    assert!(config.password.is_none());
}

#[tokio::test]
async fn test_redis_backend_kind() {
    let backend = RedisBackend::new(RedisBackendConfig::default()).unwrap();
    assert_eq!(backend.kind(), BackendKind::Redis);
    assert_eq!(backend.backend_name(), "redis");
}

// ============================================================================
// Integration Tests (requires Docker for testcontainers)
// ============================================================================

/// Integration tests that require a real Redis instance via testcontainers.
///
/// Skip if no Docker:
///   cargo test -p hms-persistence -- --skip redis_integration
#[cfg(test)]
mod redis_integration {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    use hms_persistence::analytics::AnalyticsReport;
    use hms_persistence::backends::redis::{RedisBackend, RedisBackendConfig};
    use hms_persistence::core::KeyValueStore;
    use hms_persistence::repository::EntityRepository;
    use hms_persistence::types::EntityKind;

    use testcontainers::ImageExt;
    use testcontainers::runners::AsyncRunner;
    use testcontainers_modules::redis::{REDIS_PORT, Redis};
    use tokio::sync::OnceCell;

    use crate::common::*;

    /// Shared Redis container reused across all tests in this module.
    struct SharedRedis {
        host: String,
        port: u16,
        /// Kept alive for the duration of the test binary; dropped at process exit.
        _container: testcontainers::ContainerAsync<Redis>,
    }

    static SHARED_REDIS: OnceCell<SharedRedis> = OnceCell::const_new();

    /// Next logical database to hand out. Redis ships with 16.
    static NEXT_DB: AtomicI64 = AtomicI64::new(0);

    async fn shared_redis() -> &'static SharedRedis {
        SHARED_REDIS
            .get_or_init(|| async {
                let run_id = std::env::var("GITHUB_RUN_ID").unwrap_or_default();
                let container = Redis::default()
                    .with_label("github.run_id", &run_id)
                    .start()
                    .await
                    .expect("Failed to start Redis container");

                let port = container
                    .get_host_port_ipv4(REDIS_PORT)
                    .await
                    .expect("Failed to get host port");

                let host = container
                    .get_host()
                    .await
                    .expect("Failed to get host")
                    .to_string();

                SharedRedis {
                    host,
                    port,
                    _container: container,
                }
            })
            .await
    }

    /// Creates a backend on a logical database no other test uses.
    async fn create_backend() -> RedisBackend {
        let redis = shared_redis().await;
        let db = NEXT_DB.fetch_add(1, Ordering::SeqCst);
        assert!(db < 16, "out of logical databases");

        let config = RedisBackendConfig {
            host: redis.host.clone(),
            port: redis.port,
            db,
            max_connections: 4,
            ..Default::default()
        };

        RedisBackend::new(config).expect("Failed to create RedisBackend")
    }

    async fn create_repo() -> EntityRepository<RedisBackend> {
        let repo = EntityRepository::new(Arc::new(create_backend().await));
        repo.seed().await.expect("Failed to seed");
        repo
    }

    #[tokio::test]
    async fn redis_integration_ping() {
        let backend = create_backend().await;
        assert!(backend.ping().await.is_ok());
    }

    #[tokio::test]
    async fn redis_integration_primitive_commands() {
        let backend = create_backend().await;

        assert_eq!(backend.get("missing").await.unwrap(), None);
        assert_eq!(backend.incr("counter").await.unwrap(), 1);
        assert_eq!(backend.incr("counter").await.unwrap(), 2);

        assert!(backend.set_if_absent("flag", "1").await.unwrap());
        assert!(!backend.set_if_absent("flag", "2").await.unwrap());
        assert_eq!(backend.get("flag").await.unwrap(), Some("1".to_string()));

        assert!(backend.hset("h", "a", "1").await.unwrap());
        assert!(!backend.hset("h", "a", "2").await.unwrap());
        assert_eq!(backend.hgetall("h").await.unwrap()["a"], "2");

        assert!(backend.sadd("s", "x").await.unwrap());
        assert!(!backend.sadd("s", "x").await.unwrap());
        assert_eq!(backend.scard("s").await.unwrap(), 1);
        assert_eq!(backend.smembers("s").await.unwrap(), vec!["x"]);
    }

    #[tokio::test]
    async fn redis_integration_seed_once() {
        let repo = create_repo().await;

        assert!(!repo.seed().await.unwrap());
        for kind in EntityKind::ALL {
            assert_eq!(repo.counter(kind).await.unwrap(), Some(1));
        }
    }

    #[tokio::test]
    async fn redis_integration_scenario() {
        let repo = create_repo().await;

        let created = repo
            .create(EntityKind::Hospital, &hospital("St. Mary"))
            .await
            .unwrap();
        assert_eq!(created.message(), "OK: ID 1 for St. Mary");

        let created = repo
            .create(EntityKind::Doctor, &doctor("Smith", Some("1")))
            .await
            .unwrap();
        assert_eq!(created.message(), "OK: ID 1 for Smith");

        let hospitals = repo.list(EntityKind::Hospital).await.unwrap();
        assert_eq!(hospitals.len(), 1);
        assert_eq!(hospitals[0].get("beds_number"), Some("120"));

        let report = AnalyticsReport::compute(&repo).await.unwrap();
        assert_eq!(report.hospital_count, 1);
        assert_eq!(report.doctor_count, 1);
        assert_eq!(report.hospitals_with_stats.len(), 1);
        assert_eq!(report.hospitals_with_stats[0].doctors_count, 1);
    }

    #[tokio::test]
    async fn redis_integration_links() {
        let repo = create_repo().await;
        repo.create(EntityKind::Doctor, &doctor("Smith", None))
            .await
            .unwrap();
        repo.create(EntityKind::Patient, &patient("Doe", "F"))
            .await
            .unwrap();

        repo.link("1", "1").await.unwrap();
        repo.link("1", "1").await.unwrap();

        let links = repo.links().await.unwrap();
        assert_eq!(links[&1], vec!["1"]);
    }

    #[tokio::test]
    async fn redis_integration_unreachable_server_is_connectivity() {
        let config = RedisBackendConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            connection_timeout_ms: 200,
            ..Default::default()
        };
        let backend = RedisBackend::new(config).unwrap();

        let err = backend.get("anything").await.unwrap_err();
        assert!(err.is_connectivity(), "{:?}", err);
    }
}
