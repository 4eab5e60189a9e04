//! In-memory country source for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::CountrySource;
use crate::error::{CountryError, Result};
use crate::models::{Country, CountryName, Flags};

// == Stub Source ==
/// Serves a fixed dataset and counts calls.
#[derive(Debug, Default)]
pub(crate) struct StubSource {
    countries: Vec<(String, Country)>,
    failing: AtomicBool,
    delay: Option<Duration>,
    all_calls: AtomicUsize,
    code_calls: AtomicUsize,
}

impl StubSource {
    /// `entries` pairs a country code with its record.
    pub fn new(entries: Vec<(&str, Country)>) -> Self {
        Self {
            countries: entries
                .into_iter()
                .map(|(code, country)| (code.to_string(), country))
                .collect(),
            ..Default::default()
        }
    }

    /// Germany and Japan, codes `de` and `jp`.
    pub fn germany_and_japan() -> Self {
        Self::new(vec![
            ("de", country("Germany", "Europe", &["Berlin"], &["UTC+1"])),
            ("jp", country("Japan", "Asia", &["Tokyo"], &["UTC+9"])),
        ])
    }

    // == Behaviour Toggles ==
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    // == Call Counters ==
    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    pub fn code_calls(&self) -> usize {
        self.code_calls.load(Ordering::SeqCst)
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    async fn respond(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(CountryError::UpstreamUnavailable(
                "stub upstream is down".to_string(),
            ));
        }
        Ok(())
    }
}

// == Country Source ==
#[async_trait]
impl CountrySource for StubSource {
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(self.countries.iter().map(|(_, c)| c.clone()).collect())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Vec<Country>> {
        self.code_calls.fetch_add(1, Ordering::SeqCst);
        self.respond().await?;
        Ok(self
            .countries
            .iter()
            .filter(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, country)| country.clone())
            .collect())
    }
}

// == Fixtures ==
/// Builds a record with the fields the filters look at.
pub(crate) fn country(name: &str, region: &str, capitals: &[&str], timezones: &[&str]) -> Country {
    fn owned(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    Country {
        name: CountryName {
            common: name.to_string(),
        },
        capital: owned(capitals),
        region: region.to_string(),
        timezones: owned(timezones),
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{}.png", name.to_lowercase()),
            svg: None,
        },
        population: 0,
        currencies: Default::default(),
    }
}
