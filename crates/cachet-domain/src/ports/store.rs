//! Remote Key-Value Store Port
//!
//! The operations a remote in-memory store must offer to back a cache.
//! Keys reach this layer fully composed (prefix included); values are
//! opaque payloads produced by the codec.

use crate::error::Result;
use async_trait::async_trait;

/// Remote Key-Value Store Port
///
/// # Implementations
///
/// - **Redis**: `cachet_providers::store::RedisStore`
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Raw payload stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store without expiration
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Store with an expiry of `seconds`, forwarded to the store unchanged
    async fn set_with_expiry(&self, key: &str, value: Vec<u8>, seconds: i64) -> Result<()>;

    /// Delete `key`, returning the number of removed entries
    async fn delete(&self, key: &str) -> Result<u64>;

    /// Number of entries matching `key` (0 or 1)
    async fn exists(&self, key: &str) -> Result<u64>;

    /// Every key matching a glob-style `pattern`
    ///
    /// Fails with [`Error::InvalidPattern`](crate::error::Error::InvalidPattern)
    /// when the pattern is rejected.
    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>>;

    /// Identifier of the store (e.g. "redis")
    fn store_name(&self) -> &str;
}
