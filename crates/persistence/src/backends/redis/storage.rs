//! KeyValueStore implementation for Redis.

use async_trait::async_trait;
use bb8_redis::redis::{self, AsyncCommands};
use tracing::trace;

use crate::core::{BackendKind, KeyValueStore};
use crate::error::StorageResult;
use crate::types::Fields;

use super::RedisBackend;
use super::backend::redis_error;

#[async_trait]
impl KeyValueStore for RedisBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Redis
    }

    async fn ping(&self) -> StorageResult<()> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .map_err(redis_error)?;
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        trace!(key, "GET");
        let mut conn = self.connection().await?;
        conn.get(key).await.map_err(redis_error)
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        trace!(key, "SET");
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await.map_err(redis_error)?;
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: &str) -> StorageResult<bool> {
        trace!(key, "SETNX");
        let mut conn = self.connection().await?;
        conn.set_nx(key, value).await.map_err(redis_error)
    }

    async fn incr(&self, key: &str) -> StorageResult<i64> {
        trace!(key, "INCR");
        let mut conn = self.connection().await?;
        conn.incr(key, 1i64).await.map_err(redis_error)
    }

    async fn hgetall(&self, key: &str) -> StorageResult<Fields> {
        trace!(key, "HGETALL");
        let mut conn = self.connection().await?;
        conn.hgetall(key).await.map_err(redis_error)
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> StorageResult<bool> {
        trace!(key, field, "HSET");
        let mut conn = self.connection().await?;
        let added: i64 = conn.hset(key, field, value).await.map_err(redis_error)?;
        Ok(added > 0)
    }

    async fn sadd(&self, key: &str, member: &str) -> StorageResult<bool> {
        trace!(key, member, "SADD");
        let mut conn = self.connection().await?;
        let added: i64 = conn.sadd(key, member).await.map_err(redis_error)?;
        Ok(added > 0)
    }

    async fn smembers(&self, key: &str) -> StorageResult<Vec<String>> {
        trace!(key, "SMEMBERS");
        let mut conn = self.connection().await?;
        conn.smembers(key).await.map_err(redis_error)
    }

    async fn scard(&self, key: &str) -> StorageResult<u64> {
        trace!(key, "SCARD");
        let mut conn = self.connection().await?;
        conn.scard(key).await.map_err(redis_error)
    }
}
