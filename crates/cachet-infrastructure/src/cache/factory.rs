//! Cache factory

use crate::config::{CacheConfig, CacheProviderKind};
use crate::logging::log_cache_created;
use cachet_domain::error::{Error, Result};
use cachet_domain::ports::SimpleCache;
use cachet_providers::cache::{CacheDecorator, NullCache, RedisCache};
use cachet_providers::store::RedisStore;
use std::sync::Arc;

/// Builds caches from configuration
///
/// | Configuration | Result |
/// |---------------|--------|
/// | `enabled = false` | [`NullCache`] |
/// | `provider = "null"` | [`NullCache`] |
/// | `provider = "redis"` | [`CacheDecorator`] over a [`RedisCache`] |
///
/// Creating a Redis cache validates the URL but does not connect; the first
/// operation does.
pub struct CacheFactory;

impl CacheFactory {
    /// Create the cache described by `config`
    pub fn create(config: &CacheConfig) -> Result<Arc<dyn SimpleCache>> {
        let cache: Arc<dyn SimpleCache> = match (config.enabled, config.provider) {
            (false, _) | (true, CacheProviderKind::Null) => Arc::new(NullCache::new()),
            (true, CacheProviderKind::Redis) => {
                // The URL may carry credentials; keep it out of the message.
                let store = RedisStore::new(&config.redis_url).map_err(|e| {
                    Error::configuration_with_source("Invalid Redis URL for the cache", e)
                })?;
                let remote = RedisCache::new(store, config.store_prefix.clone());
                Arc::new(CacheDecorator::new(
                    remote,
                    config.key_prefix.clone(),
                    config.default_ttl.clone(),
                ))
            }
        };

        log_cache_created(cache.name(), &config.key_prefix);
        Ok(cache)
    }
}
