//! Null cache
//!
//! A cache implementation that doesn't store anything. Used when caching is
//! disabled by configuration.

use async_trait::async_trait;
use cachet_domain::error::Result;
use cachet_domain::ports::SimpleCache;
use cachet_domain::value_objects::Ttl;
use serde_json::Value;

/// Null cache that doesn't store anything
///
/// Reads always fall through to the caller's default and every write,
/// delete, clear and existence check reports `false`. Bulk operations are
/// the shared ones, so `set_multiple` and `delete_multiple` report `false`
/// for one or more keys and `true` for none.
///
/// # Example
///
/// ```rust
/// use cachet_providers::cache::NullCache;
///
/// let cache = NullCache::new();
/// // Nothing is ever cached
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl NullCache {
    /// Create a new null cache
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SimpleCache for NullCache {
    async fn get(&self, _key: &str, default: Option<Value>) -> Result<Option<Value>> {
        Ok(default)
    }

    async fn set(&self, _key: &str, _value: Value, _ttl: Option<Ttl>) -> Result<bool> {
        Ok(false)
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn clear(&self) -> Result<bool> {
        Ok(false)
    }

    async fn has(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "null"
    }
}
