//! Specialized cache presets
//!
//! Fixed-configuration instantiations of the generic engine for the two
//! record types the orchestration layer stages, plus a mutex-backed wrapper
//! for callers that share one cache instance across threads. The presets
//! are plain factory functions over [`BoundedTtlCache`]; they add no
//! behavior beyond pinning the configuration.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{key, BoundedTtlCache, CacheStats};
use crate::config::CacheConfig;
use crate::models::{Run, Scenario};

// == Preset Parameters ==
/// How long a staged record stays servable.
pub const STAGING_TTL: Duration = Duration::from_millis(120_000);

/// Capacity of the scenario cache.
pub const SCENARIO_CAPACITY: usize = 200;

/// Capacity of the run cache.
pub const RUN_CAPACITY: usize = 300;

/// Cache holding scenario records, keyed by scenario id.
pub type ScenarioCache = BoundedTtlCache<Scenario>;

/// Cache holding run records, keyed by run id.
pub type RunCache = BoundedTtlCache<Run>;

// == Factories ==
/// Creates the scenario staging cache (TTL 120 s, 200 entries).
pub fn scenario_cache() -> ScenarioCache {
    BoundedTtlCache::new(CacheConfig::new(STAGING_TTL, SCENARIO_CAPACITY), key::derive)
        .expect("scenario preset config is statically valid")
}

/// Creates the run staging cache (TTL 120 s, 300 entries).
pub fn run_cache() -> RunCache {
    BoundedTtlCache::new(CacheConfig::new(STAGING_TTL, RUN_CAPACITY), key::derive)
        .expect("run preset config is statically valid")
}

// == Shared Cache ==
/// Thread-safe handle around a cache instance.
///
/// The engine itself is `&mut self` and not internally synchronized; this
/// wrapper closes the race between concurrent `set` calls with one mutex
/// per cache instance. Within a critical section semantics are
/// last-writer-wins, and every overwrite is an atomic whole-entry
/// replacement.
pub struct SharedCache<T> {
    inner: Arc<Mutex<BoundedTtlCache<T>>>,
}

impl<T: Clone> SharedCache<T> {
    /// Wraps a cache for shared use.
    pub fn new(cache: BoundedTtlCache<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoundedTtlCache<T>> {
        // A poisoned lock still holds a coherent map: every mutation is a
        // whole-entry replacement, so the cache outlives a panicking peer.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or overwrites a record.
    pub fn set(&self, item: T) {
        self.lock().set(item);
    }

    /// Retrieves a record by key, pruning it if expired.
    pub fn get(&self, key: &str) -> Option<T> {
        self.lock().get(key)
    }

    /// Snapshot of the held values in insertion order.
    pub fn values(&self) -> Vec<T> {
        self.lock().values()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Current activity counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }
}

impl<T> Clone for SharedCache<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
