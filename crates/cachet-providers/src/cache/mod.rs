//! Cache Implementations
//!
//! Backends and decorators implementing the `SimpleCache` port.
//!
//! ## Available Caches
//!
//! | Cache | Type | Description |
//! |-------|------|-------------|
//! | [`NullCache`] | Backend | No-op for disabled caching |
//! | [`RemoteStoreCache`] | Backend | Serialized values in a remote key-value store |
//! | [`RedisCache`] | Backend | `RemoteStoreCache` over Redis |
//! | [`CacheDecorator`] | Decorator | Key prefix plus default TTL |
//! | [`GatewayCache`] | Decorator | Key prefix taken from the inner cache |
//!
//! ## Selection Guide
//!
//! - **Caching disabled**: `NullCache`
//! - **Shared store**: `RedisCache`, usually behind a `CacheDecorator`
//!   giving each logical cache its own namespace

pub mod decorator;
pub mod null;
pub mod remote;

pub use decorator::{CacheDecorator, GatewayCache};
pub use null::NullCache;
pub use remote::RemoteStoreCache;

/// Remote store cache over Redis
#[cfg(feature = "store-redis")]
pub type RedisCache = RemoteStoreCache<crate::store::RedisStore>;
