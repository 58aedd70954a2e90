//! Error types for the staging cache
//!
//! Provides unified error handling using thiserror.
//!
//! The error surface is deliberately small: cache reads never fail (a miss
//! and an expired entry both surface as `None`), so the only fallible path
//! is cache construction with an invalid configuration.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised when constructing a cache from an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_items` must allow at least one entry
    #[error("max_items must be at least 1, got 0")]
    ZeroCapacity,

    /// TTL must be a positive duration
    #[error("ttl must be greater than zero")]
    ZeroTtl,
}

// == Result Type Alias ==
/// Convenience Result type for the staging cache.
pub type Result<T> = std::result::Result<T, ConfigError>;
