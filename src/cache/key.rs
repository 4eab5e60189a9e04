//! Cache key namespace.
//!
//! One flat store holds every query shape; the prefixes below keep them apart.

use crate::models::SearchFilters;

/// Key of the full country dataset.
pub const ALL_COUNTRIES: &str = "allCountries";

const COUNTRY_PREFIX: &str = "country-";
const REGION_PREFIX: &str = "region-";
const SEARCH_PREFIX: &str = "search-";

/// Key for a lookup by country code, e.g. `country-de`.
pub fn country(code: &str) -> String {
    format!("{COUNTRY_PREFIX}{code}")
}

/// Key for a region listing, e.g. `region-Europe`.
pub fn region(region: &str) -> String {
    format!("{REGION_PREFIX}{region}")
}

/// Key for a search, e.g. `search-{"name":"ger"}`.
pub fn search(filters: &SearchFilters) -> String {
    format!("{SEARCH_PREFIX}{}", filters.signature())
}
