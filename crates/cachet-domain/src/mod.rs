//! # cachet domain
//!
//! Core contracts and value objects for cachet: the cache port every
//! backend and decorator implements, the remote store port the Redis
//! adapter is written against, TTL normalization and the error taxonomy.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports`] | `SimpleCache`, `PrefixedCache`, `KeyValueStore` |
//! | [`value_objects`] | `Ttl`, `TtlInterval`, `MultipleDefault` |
//! | [`error`] | `Error` and `Result` |
//! | [`constants`] | Shared constants |

/// Domain constants
pub mod constants;
/// Error types
pub mod error;
/// Port traits
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{KeyValueStore, PrefixedCache, SimpleCache, TypedCacheExt};
pub use value_objects::{MultipleDefault, Ttl, TtlInterval};
