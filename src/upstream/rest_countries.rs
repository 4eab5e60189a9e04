//! REST Countries API client
//!
//! Talks to `https://restcountries.com/v3.1` (or any server exposing the same
//! `/all` and `/alpha/{code}` routes).

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use super::CountrySource;
use crate::error::{CountryError, Result};
use crate::models::Country;

// == Wire Format ==
/// Fields requested by the full-dataset query.
pub const ALL_FIELDS: &str = "name,region,capital,timezones,flags,currencies";

/// `/alpha/{code}` answers with an array, or a bare object on some versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Country>),
    One(Box<Country>),
}

impl From<OneOrMany> for Vec<Country> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(countries) => countries,
            OneOrMany::One(country) => vec![*country],
        }
    }
}

// == Client ==
/// HTTP implementation of [`CountrySource`].
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: Client,
    base_url: String,
}

impl RestCountriesClient {
    /// Creates a client rooted at `base_url`, e.g. `https://restcountries.com/v3.1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a preconfigured `http` client, e.g. one with a request timeout.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/alpha/{code}`, with `code` pushed as one escaped path segment.
    fn code_url(&self, code: &str) -> Result<Url> {
        let invalid = || {
            CountryError::UpstreamUnavailable(format!("invalid upstream URL: {}", self.base_url))
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push("alpha")
            .push(code);
        Ok(url)
    }
}

/// Country codes are short alphanumeric strings (`de`, `deu`, `276`).
fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

// == Country Source ==
#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = format!("{}/all", self.base_url);
        debug!(url = %url, "fetching all countries");

        let response = self
            .http
            .get(&url)
            .query(&[("fields", ALL_FIELDS)])
            .send()
            .await
            .map_err(|e| upstream_failure(&url, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| upstream_failure(&url, e))?;

        response
            .json::<Vec<Country>>()
            .await
            .map_err(|e| upstream_failure(&url, e))
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Vec<Country>> {
        // Anything else cannot name a country
        if !is_valid_code(code) {
            debug!(code, "rejecting malformed country code");
            return Ok(Vec::new());
        }

        let url = self.code_url(code)?;
        debug!(url = %url, "fetching country by code");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| upstream_failure(url.as_str(), e))?;

        // Unknown codes come back as 404
        if response.status() == StatusCode::NOT_FOUND {
            debug!(code, "upstream has no country for code");
            return Ok(Vec::new());
        }

        let response = response
            .error_for_status()
            .map_err(|e| upstream_failure(url.as_str(), e))?;

        let body = response
            .json::<OneOrMany>()
            .await
            .map_err(|e| upstream_failure(url.as_str(), e))?;

        Ok(body.into())
    }
}

// == Errors ==
fn upstream_failure(url: &str, err: reqwest::Error) -> CountryError {
    CountryError::UpstreamUnavailable(format!("GET {url}: {err}"))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = RestCountriesClient::new("http://localhost:8080/v3.1/");
        assert_eq!(client.base_url(), "http://localhost:8080/v3.1");
    }

    #[test]
    fn test_one_or_many_accepts_both_shapes() {
        let many: OneOrMany =
            serde_json::from_str(r#"[{"name": {"common": "Japan"}, "region": "Asia"}]"#).unwrap();
        assert_eq!(Vec::<Country>::from(many).len(), 1);

        let one: OneOrMany =
            serde_json::from_str(r#"{"name": {"common": "Japan"}, "region": "Asia"}"#).unwrap();
        let countries: Vec<Country> = one.into();
        assert_eq!(countries[0].common_name(), "Japan");
    }

    #[test]
    fn test_code_validation() {
        assert!(is_valid_code("de"));
        assert!(is_valid_code("DEU"));
        assert!(is_valid_code("276"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("../all"));
        assert!(!is_valid_code("de?fields=name"));
        assert!(!is_valid_code("de#x"));
        assert!(!is_valid_code("dé"));
    }

    #[test]
    fn test_code_url_keeps_base_path() {
        let client = RestCountriesClient::new("http://localhost:8080/v3.1/");
        let url = client.code_url("jp").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v3.1/alpha/jp");
    }

    #[tokio::test]
    async fn test_malformed_code_never_leaves_process() {
        // Would be a connection error if a request were attempted
        let client = RestCountriesClient::new("http://127.0.0.1:9");

        assert!(client.fetch_by_code("../all").await.unwrap().is_empty());
        assert!(client.fetch_by_code("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_unavailable() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let client = RestCountriesClient::new("http://127.0.0.1:9");

        let result = client.fetch_all().await;
        assert!(matches!(result, Err(CountryError::UpstreamUnavailable(_))));
    }
}
