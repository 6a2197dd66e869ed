//! Domain Value Objects
//!
//! Immutable value objects shared by every cache implementation.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Ttl`] | Expiration directive: seconds or calendar interval |
//! | [`TtlInterval`] | Calendar-style duration (ISO-8601 text form) |
//! | [`MultipleDefault`] | Fallbacks for multi-key reads |

/// Fallback values for multi-key reads
pub mod defaults;
/// Time-to-live values and normalization
pub mod ttl;

pub use defaults::MultipleDefault;
pub use ttl::{Ttl, TtlInterval, normalize_ttl, ttl_or_default};
