//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `cachet_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cachet.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Application directory under the user's config dir
pub const APP_CONFIG_DIR: &str = "cachet";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CACHET";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default Redis connection URL
pub const CACHE_DEFAULT_REDIS_URL: &str = cachet_providers::constants::REDIS_DEFAULT_URL;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CACHET_LOG";

/// File stem used when the configured log path has none
pub const LOG_FILE_FALLBACK_STEM: &str = "cachet";
