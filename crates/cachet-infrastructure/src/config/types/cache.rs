//! Cache configuration types

use crate::constants::CACHE_DEFAULT_REDIS_URL;
use cachet_domain::constants::DEFAULT_KEY_PREFIX;
use cachet_domain::value_objects::Ttl;
use serde::{Deserialize, Serialize};

/// Cache providers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheProviderKind {
    /// Stores nothing
    #[default]
    Null,
    /// Remote cache (Redis)
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled; a disabled cache is a null cache
    pub enabled: bool,

    /// Cache provider
    pub provider: CacheProviderKind,

    /// Redis URL (for Redis provider)
    pub redis_url: String,

    /// Prefix applied by the Redis-backed cache itself
    pub store_prefix: String,

    /// Prefix applied by the namespacing decorator
    pub key_prefix: String,

    /// TTL applied when a write carries none: seconds or an ISO-8601 duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<Ttl>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CacheProviderKind::default(),
            redis_url: CACHE_DEFAULT_REDIS_URL.to_string(),
            store_prefix: DEFAULT_KEY_PREFIX.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            default_ttl: None,
        }
    }
}
