//! Configuration Module
//!
//! Cache construction parameters, fixed for the lifetime of a cache instance.

use std::time::Duration;

use crate::error::{ConfigError, Result};

// == Snapshot Policy ==
/// Controls whether [`values`](crate::BoundedTtlCache::values) filters
/// expired entries out of snapshots.
///
/// Expiry is lazy: entries are only deleted when individually observed by
/// `get`. Under the default `KeepExpired` policy a snapshot mirrors that
/// discipline and may include entries that would expire on their next `get`.
/// `PruneExpired` filters them from the snapshot instead (without deleting
/// them; deletion remains exclusive to `get`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnapshotPolicy {
    /// Snapshots include entries past their TTL that have not been read yet.
    #[default]
    KeepExpired,
    /// Snapshots exclude entries past their TTL.
    PruneExpired,
}

// == Cache Config ==
/// Configuration for a [`BoundedTtlCache`](crate::BoundedTtlCache).
///
/// Immutable once a cache has been constructed from it.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum age of an entry, measured from insertion
    pub ttl: Duration,
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
    /// Whether snapshots filter expired entries
    pub snapshot_policy: SnapshotPolicy,
}

impl CacheConfig {
    /// Creates a config with the default snapshot policy.
    pub fn new(ttl: Duration, max_items: usize) -> Self {
        Self {
            ttl,
            max_items,
            snapshot_policy: SnapshotPolicy::default(),
        }
    }

    /// Sets the snapshot policy.
    pub fn with_snapshot_policy(mut self, policy: SnapshotPolicy) -> Self {
        self.snapshot_policy = policy;
        self
    }

    /// Checks the config for values the cache cannot operate with.
    ///
    /// A zero capacity would make every insertion evict itself and a zero
    /// TTL would expire every entry on its first read, so both are rejected
    /// at construction time rather than given a degenerate meaning.
    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.ttl.is_zero() {
            return Err(ConfigError::ZeroTtl);
        }
        Ok(())
    }
}
