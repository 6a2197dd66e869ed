//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the cache contract.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Cache construction from configuration |
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`logging`] | Structured logging with tracing |
//!
//! ## Usage
//!
//! ```ignore
//! use cachet_infrastructure::{CacheFactory, ConfigLoader, logging::init_logging};
//!
//! let config = ConfigLoader::new().load()?;
//! init_logging(config.logging.clone())?;
//! let cache = CacheFactory::create(&config.cache)?;
//! ```

pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use cache::CacheFactory;
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
