//! Staging Cache - a bounded in-memory cache with TTL expiry
//!
//! Holds short-lived scenario and run records produced by an orchestration
//! layer so query paths can answer by id, or take a snapshot, without
//! touching the authoritative store. Entries expire lazily on read and the
//! oldest entry by first insertion is evicted when capacity is exceeded.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod presets;

pub use cache::{BoundedTtlCache, CacheStats};
pub use config::{CacheConfig, SnapshotPolicy};
pub use error::{ConfigError, Result};
pub use presets::{run_cache, scenario_cache, RunCache, ScenarioCache, SharedCache};
