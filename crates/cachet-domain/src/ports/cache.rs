//! Cache Port
//!
//! The uniform key-value cache contract implemented by every backend and
//! decorator, plus the bulk operations shared by all of them.
//!
//! ## Contract
//!
//! | Operation | Negative outcome |
//! |-----------|------------------|
//! | `get` | caller-supplied default |
//! | `set` / `delete` / `clear` / `has` | `Ok(false)` |
//! | `get_multiple` | per-key default |
//! | `set_multiple` / `delete_multiple` | `Ok(false)` if any single call reported `false` |
//!
//! Store faults are returned as `Err` and never folded into `false`.

use crate::error::Result;
use crate::value_objects::{MultipleDefault, Ttl};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache Port
///
/// Implementations only provide the five single-key operations; the
/// multi-key operations are written once here in terms of them.
///
/// # Example
///
/// ```ignore
/// use cachet_domain::ports::SimpleCache;
/// use cachet_domain::value_objects::Ttl;
/// use serde_json::json;
///
/// cache.set("user:123", json!({"name": "ada"}), Some(Ttl::seconds(300))).await?;
/// let user = cache.get("user:123", None).await?;
/// ```
#[async_trait]
pub trait SimpleCache: Send + Sync + std::fmt::Debug {
    /// Stored value for `key`, or `default` when the key is not cached
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>>;

    /// Store `value` under `key`; `None` means no expiration
    async fn set(&self, key: &str, value: Value, ttl: Option<Ttl>) -> Result<bool>;

    /// Remove `key`
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Remove every entry owned by this cache
    async fn clear(&self) -> Result<bool>;

    /// Whether `key` is cached, without fetching the value
    async fn has(&self, key: &str) -> Result<bool>;

    /// Identifier of this implementation (e.g. "redis", "null")
    fn name(&self) -> &str;

    /// Look up every key, each with its resolved fallback
    async fn get_multiple(
        &self,
        keys: &[String],
        default: MultipleDefault,
    ) -> Result<HashMap<String, Option<Value>>> {
        let mut values = HashMap::with_capacity(keys.len());
        for key in keys {
            let value = self.get(key, default.for_key(key)).await?;
            values.insert(key.clone(), value);
        }
        Ok(values)
    }

    /// Store every entry; `true` only if every `set` reported `true`
    ///
    /// Every entry is attempted even after a `false`.
    async fn set_multiple(&self, entries: &[(String, Value)], ttl: Option<Ttl>) -> Result<bool> {
        let mut result = true;
        for (key, value) in entries {
            result = self.set(key, value.clone(), ttl.clone()).await? && result;
        }
        Ok(result)
    }

    /// Delete every key; `true` only if every `delete` reported `true`
    ///
    /// Every key is attempted even after a `false`.
    async fn delete_multiple(&self, keys: &[String]) -> Result<bool> {
        let mut result = true;
        for key in keys {
            result = self.delete(key).await? && result;
        }
        Ok(result)
    }
}

/// A cache that reports a key prefix for its wrapper to apply
///
/// Implementors expect keys to arrive already prefixed and must not add the
/// prefix themselves; a wrapping decorator composes `prefix() + key` once.
pub trait PrefixedCache: SimpleCache {
    /// Prefix composed in front of every raw key
    fn prefix(&self) -> &str;
}

#[async_trait]
impl<T: SimpleCache + ?Sized> SimpleCache for Arc<T> {
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        (**self).get(key, default).await
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Ttl>) -> Result<bool> {
        (**self).set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key).await
    }

    async fn clear(&self) -> Result<bool> {
        (**self).clear().await
    }

    async fn has(&self, key: &str) -> Result<bool> {
        (**self).has(key).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn get_multiple(
        &self,
        keys: &[String],
        default: MultipleDefault,
    ) -> Result<HashMap<String, Option<Value>>> {
        (**self).get_multiple(keys, default).await
    }

    async fn set_multiple(&self, entries: &[(String, Value)], ttl: Option<Ttl>) -> Result<bool> {
        (**self).set_multiple(entries, ttl).await
    }

    async fn delete_multiple(&self, keys: &[String]) -> Result<bool> {
        (**self).delete_multiple(keys).await
    }
}

impl<T: PrefixedCache + ?Sized> PrefixedCache for Arc<T> {
    fn prefix(&self) -> &str {
        (**self).prefix()
    }
}

/// Typed access on top of any [`SimpleCache`]
///
/// Values pass through `serde_json::Value`, so anything `Serialize` can be
/// stored and anything `DeserializeOwned` read back.
#[async_trait]
pub trait TypedCacheExt: SimpleCache {
    /// Typed read; `None` when the key is not cached
    async fn get_as<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.get(key, None).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Typed write
    async fn set_as<T>(&self, key: &str, value: &T, ttl: Option<Ttl>) -> Result<bool>
    where
        T: Serialize + Sync,
    {
        let value = serde_json::to_value(value)?;
        self.set(key, value, ttl).await
    }
}

impl<C: SimpleCache + ?Sized> TypedCacheExt for C {}
