//! Namespacing decorators
//!
//! Wrappers that put every key of an inner cache behind a prefix.
//!
//! | Decorator | Prefix source | Default TTL |
//! |-----------|---------------|-------------|
//! | [`CacheDecorator`] | configured | configured |
//! | [`GatewayCache`] | `inner.prefix()` | none |
//!
//! `clear` is forwarded unscoped by both: it clears the whole inner cache,
//! not just the decorator's namespace.

use async_trait::async_trait;
use cachet_domain::error::Result;
use cachet_domain::ports::{PrefixedCache, SimpleCache};
use cachet_domain::value_objects::{Ttl, ttl_or_default};
use serde_json::Value;

/// Prefixing and TTL-defaulting decorator
///
/// Every key is forwarded as `prefix + key`. A `set` without a TTL, or
/// with a zero TTL, uses the configured default instead.
///
/// # Example
///
/// ```rust
/// use cachet_domain::value_objects::Ttl;
/// use cachet_providers::cache::{CacheDecorator, NullCache};
///
/// let cache = CacheDecorator::new(NullCache::new(), "sessions:", Some(Ttl::seconds(300)));
/// assert_eq!(cache.default_ttl(), Some(&Ttl::seconds(300)));
/// ```
#[derive(Debug, Clone)]
pub struct CacheDecorator<C> {
    inner: C,
    prefix: String,
    default_ttl: Option<Ttl>,
}

impl<C: SimpleCache> CacheDecorator<C> {
    /// Wrap `inner` with a key prefix and a default TTL
    pub fn new<P: Into<String>>(inner: C, prefix: P, default_ttl: Option<Ttl>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            default_ttl,
        }
    }

    /// Wrap `inner` without prefix or default TTL
    pub fn passthrough(inner: C) -> Self {
        Self::new(inner, "", None)
    }

    /// The wrapped cache
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// TTL used when a caller supplies none
    pub fn default_ttl(&self) -> Option<&Ttl> {
        self.default_ttl.as_ref()
    }

    /// Prefix this decorator applies to every key
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn inner_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl<C: SimpleCache> SimpleCache for CacheDecorator<C> {
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        if self.has(key).await? {
            return self.inner.get(&self.inner_key(key), default).await;
        }
        Ok(default)
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Ttl>) -> Result<bool> {
        let ttl = ttl_or_default(ttl, self.default_ttl.as_ref());
        self.inner.set(&self.inner_key(key), value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.inner.delete(&self.inner_key(key)).await
    }

    async fn clear(&self) -> Result<bool> {
        self.inner.clear().await
    }

    async fn has(&self, key: &str) -> Result<bool> {
        self.inner.has(&self.inner_key(key)).await
    }

    fn name(&self) -> &str {
        "decorator"
    }
}

/// Decorator that borrows its prefix from the inner cache
///
/// Keys are forwarded as `inner.prefix() + key` and TTLs are forwarded as
/// given. The inner cache reports its prefix but leaves keys untouched, so
/// each key carries the prefix once. Caches that prefix their own keys, such
/// as [`RemoteStoreCache`](super::RemoteStoreCache) and [`CacheDecorator`],
/// do not implement [`PrefixedCache`] and cannot be wrapped:
///
/// ```compile_fail
/// use cachet_providers::cache::{GatewayCache, RemoteStoreCache};
/// use cachet_providers::store::RedisStore;
///
/// let store = RedisStore::new("redis://localhost:6379").unwrap();
/// let _ = GatewayCache::new(RemoteStoreCache::new(store, "app:"));
/// ```
#[derive(Debug, Clone)]
pub struct GatewayCache<C> {
    inner: C,
}

impl<C: PrefixedCache> GatewayCache<C> {
    /// Wrap a self-describing cache
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped cache
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Prefix reported by the wrapped cache
    pub fn prefix(&self) -> &str {
        self.inner.prefix()
    }

    fn inner_key(&self, key: &str) -> String {
        format!("{}{}", self.inner.prefix(), key)
    }
}

#[async_trait]
impl<C: PrefixedCache> SimpleCache for GatewayCache<C> {
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        if self.has(key).await? {
            return self.inner.get(&self.inner_key(key), default).await;
        }
        Ok(default)
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Ttl>) -> Result<bool> {
        self.inner.set(&self.inner_key(key), value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.inner.delete(&self.inner_key(key)).await
    }

    async fn clear(&self) -> Result<bool> {
        self.inner.clear().await
    }

    async fn has(&self, key: &str) -> Result<bool> {
        self.inner.has(&self.inner_key(key)).await
    }

    fn name(&self) -> &str {
        "gateway"
    }
}
