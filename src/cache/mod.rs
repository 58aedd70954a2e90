//! Cache Module
//!
//! Provides a generic bounded-capacity cache with lazy TTL expiry and
//! insertion-order (FIFO) eviction.

mod entry;
pub mod key;
mod order;
mod stats;
mod store;


// Re-export public types. Entries themselves stay private: callers only
// ever see values, never the bookkeeping around them.
pub use stats::CacheStats;
pub use store::BoundedTtlCache;
