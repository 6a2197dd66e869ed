//! Domain layer constants

/// Glob suffix appended to a prefix to scan every key in its namespace
pub const NAMESPACE_WILDCARD: &str = "*";

/// Prefix used when none is configured
pub const DEFAULT_KEY_PREFIX: &str = "";
