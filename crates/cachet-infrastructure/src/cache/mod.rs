//! Cache wiring
//!
//! Turns a [`CacheConfig`](crate::config::CacheConfig) into a ready cache.
//! Cache implementations are in the cachet-providers crate.

pub mod factory;

pub use factory::CacheFactory;
