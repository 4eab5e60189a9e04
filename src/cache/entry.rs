//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::models::Country;

// == Cached Value ==
/// A value stored under a cache key: one country or an ordered list.
///
/// Records are shared behind `Arc` so a cache hit never copies the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Country(Arc<Country>),
    Countries(Arc<Vec<Country>>),
}

impl CachedValue {
    pub fn as_country(&self) -> Option<&Arc<Country>> {
        match self {
            CachedValue::Country(country) => Some(country),
            CachedValue::Countries(_) => None,
        }
    }

    pub fn as_countries(&self) -> Option<&Arc<Vec<Country>>> {
        match self {
            CachedValue::Countries(countries) => Some(countries),
            CachedValue::Country(_) => None,
        }
    }
}

impl From<Country> for CachedValue {
    fn from(country: Country) -> Self {
        CachedValue::Country(Arc::new(country))
    }
}

impl From<Vec<Country>> for CachedValue {
    fn from(countries: Vec<Country>) -> Self {
        CachedValue::Countries(Arc::new(countries))
    }
}

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: CachedValue,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` from now.
    pub fn new(value: CachedValue, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
