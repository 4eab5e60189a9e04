//! Country record as served by the upstream provider.
//!
//! Fields mirror the upstream JSON. Missing optional parts default to empty
//! values; the record is never validated or normalized by this service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single country record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub population: u64,
    /// Currency code (e.g. `EUR`) to currency details
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// Flag image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Country {
    /// Common (short) name, e.g. "Germany".
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Capital cities, empty when the upstream omits them.
    pub fn capitals(&self) -> &[String] {
        self.capital.as_deref().unwrap_or_default()
    }

    pub fn timezone_list(&self) -> &[String] {
        self.timezones.as_deref().unwrap_or_default()
    }
}
