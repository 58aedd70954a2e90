//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value with its insertion timestamp.
///
/// Owned exclusively by the cache engine; callers only ever receive clones
/// of `value`. The timestamp is monotonic (`Instant`), so wall-clock
/// adjustments cannot expire or resurrect entries.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// When this entry was inserted or last overwritten
    pub inserted_at: Instant,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry timestamped now.
    pub fn new(value: T) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl`.
    ///
    /// Boundary condition: an entry is expired only when its age is
    /// strictly greater than the TTL. An entry whose age equals the TTL
    /// exactly is still served.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }

    // == Remaining TTL ==
    /// Returns the time left before this entry expires, zero if it already
    /// has. Useful for debugging and diagnostics.
    pub fn remaining(&self, ttl: Duration) -> Duration {
        ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
