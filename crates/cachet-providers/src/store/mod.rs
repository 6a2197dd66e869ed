//! Remote Key-Value Store Implementations
//!
//! Clients implementing the `KeyValueStore` port.
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`RedisStore`] | Redis over multiplexed async connections |

#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-redis")]
pub use redis::RedisStore;
