//! Cache Store Module
//!
//! Generic bounded cache engine combining HashMap storage with
//! insertion-order eviction and lazy TTL expiry.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cache::entry::CacheEntry;
use crate::cache::order::InsertionOrder;
use crate::cache::stats::CacheStats;
use crate::config::{CacheConfig, SnapshotPolicy};
use crate::error::Result;

// == Bounded TTL Cache ==
/// Bounded-capacity cache with time-to-live expiry.
///
/// Keys are derived from the stored records by an extractor function
/// injected at construction, so the engine itself carries no per-type
/// special-casing. Eviction is by insertion order: when a `set` pushes the
/// cache over capacity, the key that was first inserted longest ago is
/// removed, regardless of how often it has been read since. Overwriting a
/// key refreshes its value and timestamp but never its position.
///
/// Expiry is lazy. Entries past their TTL are only discovered and deleted
/// when read through [`get`](Self::get); no background sweeper exists.
/// Snapshots taken with [`values`](Self::values) therefore may still
/// contain entries that have aged out but not been read, unless the config
/// selects [`SnapshotPolicy::PruneExpired`].
///
/// The engine is synchronous and not internally synchronized; shared use
/// across threads goes through [`SharedCache`](crate::presets::SharedCache).
#[derive(Debug)]
pub struct BoundedTtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// First-insertion order of keys, oldest first
    order: InsertionOrder,
    /// Activity counters
    stats: CacheStats,
    /// Capacity, TTL and snapshot policy, fixed at construction
    config: CacheConfig,
    /// Derives the cache key for a record
    extract_key: fn(&T) -> String,
}

impl<T: Clone> BoundedTtlCache<T> {
    // == Constructor ==
    /// Creates a cache from a validated config and a key extractor.
    ///
    /// # Arguments
    /// * `config` - Capacity, TTL and snapshot policy
    /// * `extract_key` - Maps a record to its cache key
    ///
    /// # Errors
    /// Returns a `ConfigError` if `max_items` is zero or the TTL is zero.
    pub fn new(config: CacheConfig, extract_key: fn(&T) -> String) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            config,
            extract_key,
        })
    }

    // == Set ==
    /// Inserts or overwrites a record, timestamped now.
    ///
    /// A new key takes the back of the eviction queue; an overwritten key
    /// keeps its original position. If the insertion pushes the cache over
    /// capacity, the oldest key by first insertion is evicted. This path
    /// never fails.
    pub fn set(&mut self, item: T) {
        let key = (self.extract_key)(&item);

        let overwrote = self.entries.insert(key.clone(), CacheEntry::new(item)).is_some();
        if !overwrote {
            self.order.record(&key);
        }
        trace!(key = %key, overwrote, size = self.entries.len(), "entry stored");

        if self.entries.len() > self.config.max_items {
            if let Some(oldest) = self.order.pop_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(key = %oldest, "capacity exceeded, evicted oldest entry");
            }
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a record by key.
    ///
    /// An entry older than the TTL is deleted as a side effect of being
    /// observed, and the read reports a miss. Misses and expiries are both
    /// `None`; neither is an error.
    pub fn get(&mut self, key: &str) -> Option<T> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(self.config.ttl) {
                self.entries.remove(key);
                self.order.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                debug!(key = %key, "entry expired on read, removed");
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Values ==
    /// Returns a snapshot of the held values in insertion order.
    ///
    /// Under the default [`SnapshotPolicy::KeepExpired`] the snapshot
    /// mirrors lazy expiry and may include entries that have aged out but
    /// not been individually read yet. `PruneExpired` filters them from the
    /// snapshot without deleting them.
    pub fn values(&self) -> Vec<T> {
        let keep_expired = self.config.snapshot_policy == SnapshotPolicy::KeepExpired;
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .filter(|entry| keep_expired || !entry.is_expired(self.config.ttl))
            .map(|entry| entry.value.clone())
            .collect()
    }

    // == Contains ==
    /// Checks whether a live (unexpired) entry exists, without touching it.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(self.config.ttl))
    }

    // == Length ==
    /// Returns the current number of entries, expired-but-unread included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Config ==
    /// Returns the configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Stats ==
    /// Returns current activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
