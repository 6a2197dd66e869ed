//! Configuration
//!
//! Typed configuration sections and the Figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, CacheConfig, CacheProviderKind, LoggingConfig};
