//! Cache Module
//!
//! Provides the in-memory, time-expiring store behind the country queries.

mod entry;
pub mod key;
mod stats;
mod store;

// Re-export public types
pub use entry::{CacheEntry, CachedValue};
pub use stats::CacheStats;
pub use store::CacheStore;
