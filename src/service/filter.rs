//! Linear filters over the country dataset.

use crate::models::{Country, SearchFilters};

// == Region ==
/// Countries whose region equals `region` exactly (case-sensitive).
pub fn by_region(countries: &[Country], region: &str) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| c.region == region)
        .cloned()
        .collect()
}

// == Search ==
/// Pre-lowered search filters, applied conjunctively.
///
/// - `name`: case-insensitive substring of the common name
/// - `capital`: case-insensitive substring of any capital
/// - `region`: case-insensitive substring of the region
/// - `timezone`: exact match against any timezone
#[derive(Debug, Clone, Default)]
pub struct SearchMatcher {
    name: Option<String>,
    capital: Option<String>,
    region: Option<String>,
    timezone: Option<String>,
}

impl SearchMatcher {
    pub fn new(filters: &SearchFilters) -> Self {
        let lower = |v: &Option<String>| v.as_deref().map(str::to_lowercase);
        Self {
            name: lower(&filters.name),
            capital: lower(&filters.capital),
            region: lower(&filters.region),
            timezone: filters.timezone.clone(),
        }
    }

    // == Matching ==
    pub fn matches(&self, country: &Country) -> bool {
        if let Some(name) = &self.name {
            if !country.common_name().to_lowercase().contains(name.as_str()) {
                return false;
            }
        }

        if let Some(capital) = &self.capital {
            if !country
                .capitals()
                .iter()
                .any(|c| c.to_lowercase().contains(capital.as_str()))
            {
                return false;
            }
        }

        if let Some(region) = &self.region {
            if !country.region.to_lowercase().contains(region.as_str()) {
                return false;
            }
        }

        if let Some(timezone) = &self.timezone {
            if !country.timezone_list().iter().any(|tz| tz == timezone) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, countries: &[Country]) -> Vec<Country> {
        countries
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}
