//! Request DTOs for the country cache API
//!
//! Defines the query strings accepted by the list and search endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{CountryError, Result};

/// Page used when the client omits `page`
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the client omits `limit`
pub const DEFAULT_LIMIT: usize = 10;

pub const INVALID_PAGINATION_MESSAGE: &str = "Page and limit must be greater than 0.";

/// Query string for the list operation (GET /countries)
///
/// Values are kept as raw strings so malformed numbers surface as
/// `InvalidArgument` rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListParams {
    /// Resolves `(page, limit)`, applying defaults and rejecting values below 1.
    pub fn resolve(&self) -> Result<(usize, usize)> {
        let page = parse_positive(self.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_positive(self.limit.as_deref(), DEFAULT_LIMIT)?;
        Ok((page, limit))
    }
}

fn parse_positive(raw: Option<&str>, default: usize) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<i64>() {
        Ok(n) if n >= 1 => usize::try_from(n)
            .map_err(|_| CountryError::InvalidArgument(INVALID_PAGINATION_MESSAGE.to_string())),
        _ => Err(CountryError::InvalidArgument(
            INVALID_PAGINATION_MESSAGE.to_string(),
        )),
    }
}

/// Query string for the search operation (GET /countries/search)
///
/// All filters are optional and combined with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl SearchFilters {
    /// Drops filters given as empty strings; they match everything.
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            name: keep(self.name),
            capital: keep(self.capital),
            region: keep(self.region),
            timezone: keep(self.timezone),
        }
    }

    /// Returns true when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.capital.is_none()
            && self.region.is_none()
            && self.timezone.is_none()
    }

    /// Deterministic JSON form of the filter set.
    ///
    /// Keys are emitted in a fixed order and absent filters are omitted, so the
    /// signature does not depend on the order parameters arrived in. Values
    /// are literal: `{"name":"a"}` and `{"name":"A"}` are different signatures.
    pub fn signature(&self) -> String {
        let mut map = Map::new();
        let fields = [
            ("name", &self.name),
            ("capital", &self.capital),
            ("region", &self.region),
            ("timezone", &self.timezone),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(map).to_string()
    }
}
