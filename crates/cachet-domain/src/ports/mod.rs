//! Domain Port Interfaces
//!
//! Boundary contracts between the cache layer and its callers (the cache
//! port) and between the cache layer and the remote store it wraps (the
//! store port).

/// Cache contract and bulk operations
pub mod cache;
/// Remote key-value store contract
pub mod store;

pub use cache::{PrefixedCache, SimpleCache, TypedCacheExt};
pub use store::KeyValueStore;
