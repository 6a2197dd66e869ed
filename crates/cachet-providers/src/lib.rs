//! # cachet - Cache Implementations
//!
//! Implementations of the ports defined in `cachet-domain`.
//!
//! ## Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `SimpleCache` | RemoteStoreCache, Null, CacheDecorator, GatewayCache |
//! | Store | `KeyValueStore` | Redis |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! cachet-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Without `store-redis` only the null cache, the decorators and the
//! generic `RemoteStoreCache` are available.
//!
//! ## Usage
//!
//! ```ignore
//! use cachet_providers::cache::{CacheDecorator, RedisCache};
//! use cachet_providers::store::RedisStore;
//!
//! let cache = RedisCache::new(RedisStore::new("redis://localhost:6379")?, "");
//! let sessions = CacheDecorator::new(cache, "sessions:", Some(Ttl::seconds(300)));
//! ```

pub use cachet_domain::error::{Error, Result};
pub use cachet_domain::ports::{KeyValueStore, PrefixedCache, SimpleCache};

/// Provider-specific constants
pub mod constants;

/// Serialized-value codec
pub mod codec;

/// Cache implementations
///
/// Implements the `SimpleCache` trait for backends and decorators.
pub mod cache;

/// Remote key-value store clients
///
/// Implements the `KeyValueStore` trait.
pub mod store;
