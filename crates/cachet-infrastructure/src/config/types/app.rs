//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::cache::{CacheConfig, CacheProviderKind};
pub use super::logging::LoggingConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Cache configuration
    pub cache: CacheConfig,
}
