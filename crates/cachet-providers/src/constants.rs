//! Provider Constants

/// URL scheme for plain Redis connections
pub const REDIS_URL_SCHEME: &str = "redis://";

/// Default Redis port
pub const REDIS_DEFAULT_PORT: u16 = 6379;

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";
