//! Upstream Module
//!
//! The country-data provider behind the cache, treated as an opaque and
//! occasionally unavailable service.

mod rest_countries;

#[cfg(test)]
pub(crate) mod stub;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Country;

pub use rest_countries::{RestCountriesClient, ALL_FIELDS};

// == Country Source ==
/// Read-only source of country records.
///
/// Implementations map transport failures and non-success statuses to
/// `CountryError::UpstreamUnavailable`.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches the full dataset.
    async fn fetch_all(&self) -> Result<Vec<Country>>;

    /// Fetches the records matching a country code. An unknown code yields
    /// an empty list, not an error.
    async fn fetch_by_code(&self, code: &str) -> Result<Vec<Country>>;
}
