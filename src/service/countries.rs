//! Country Query Cache
//!
//! Mediates between the route handlers and the upstream provider. The full
//! dataset is fetched at most once per TTL window; region and search views
//! are derived from it and cached under their own keys.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

use crate::cache::{key, CacheStore, CachedValue};
use crate::error::{CountryError, Result};
use crate::models::{Country, PaginatedResponse, SearchFilters, StatsResponse};
use crate::service::filter::{self, SearchMatcher};
use crate::service::pagination;
use crate::upstream::CountrySource;

pub const COUNTRY_NOT_FOUND_MESSAGE: &str = "Country not found";
pub const SEARCH_NOT_FOUND_MESSAGE: &str = "No countries found for the search criteria";

/// A full-dataset fetch that every concurrent caller can await.
type PendingFetch = Shared<BoxFuture<'static, Result<Arc<Vec<Country>>>>>;

/// Cached, paginated and filtered access to the country dataset.
///
/// Cheap to clone; clones share the same store and upstream.
#[derive(Clone)]
pub struct CountryService {
    cache: Arc<RwLock<CacheStore>>,
    source: Arc<dyn CountrySource>,
    /// Full-dataset fetch in progress, shared by concurrent misses
    pending: Arc<Mutex<Option<PendingFetch>>>,
    upstream_fetches: Arc<AtomicU64>,
}

impl CountryService {
    pub fn new(cache: Arc<RwLock<CacheStore>>, source: Arc<dyn CountrySource>) -> Self {
        Self {
            cache,
            source,
            pending: Arc::new(Mutex::new(None)),
            upstream_fetches: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Shared handle to the underlying store, for the sweep task.
    pub fn cache(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.cache)
    }

    // == List ==
    /// Returns page `page` of the full dataset, `limit` items per page.
    pub async fn get_all(&self, page: usize, limit: usize) -> Result<PaginatedResponse<Country>> {
        pagination::validate(page, limit)?;
        let countries = self.all_countries().await?;
        pagination::paginate(&countries, page, limit)
    }

    // == By Code ==
    /// Returns the country registered under `code`.
    pub async fn get_by_code(&self, code: &str) -> Result<Arc<Country>> {
        let cache_key = key::country(code);
        if let Some(country) = self.lookup(&cache_key).await.and_then(|v| v.as_country().cloned()) {
            return Ok(country);
        }

        let fetched = self.fetch(self.source.fetch_by_code(code)).await?;
        let Some(country) = fetched.into_iter().next() else {
            debug!(code, "no country for code");
            return Err(CountryError::NotFound(COUNTRY_NOT_FOUND_MESSAGE.to_string()));
        };

        let country = Arc::new(country);
        self.cache
            .write()
            .await
            .set(cache_key, CachedValue::Country(Arc::clone(&country)));
        Ok(country)
    }

    // == By Region ==
    /// Returns the countries whose region equals `region` exactly.
    pub async fn get_by_region(&self, region: &str) -> Result<Arc<Vec<Country>>> {
        let cache_key = key::region(region);
        if let Some(countries) = self.lookup_list(&cache_key).await {
            return Ok(countries);
        }

        let all = self.all_countries().await?;
        let matched = filter::by_region(&all, region);
        if matched.is_empty() {
            return Err(CountryError::NotFound(format!(
                "No countries found for region: {region}"
            )));
        }

        Ok(self.store_list(cache_key, matched).await)
    }

    // == Search ==
    /// Returns the countries matching every filter in `filters`.
    ///
    /// Empty-string filters are ignored. No filters at all returns the full
    /// dataset.
    pub async fn search(&self, filters: SearchFilters) -> Result<Arc<Vec<Country>>> {
        let filters = filters.normalized();
        let cache_key = key::search(&filters);
        if let Some(countries) = self.lookup_list(&cache_key).await {
            return Ok(countries);
        }

        let all = self.all_countries().await?;
        let matched = if filters.is_empty() {
            all.as_ref().clone()
        } else {
            SearchMatcher::new(&filters).apply(&all)
        };
        if matched.is_empty() {
            return Err(CountryError::NotFound(SEARCH_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(self.store_list(cache_key, matched).await)
    }

    // == Stats ==
    pub async fn stats(&self) -> StatsResponse {
        let stats = self.cache.read().await.stats();
        StatsResponse::new(&stats, self.upstream_fetches.load(Ordering::Relaxed))
    }

    // == Full Dataset ==
    /// Full dataset from `allCountries`, fetched and stored on a miss.
    ///
    /// Concurrent misses await the same upstream call and all receive its
    /// outcome, failures included.
    async fn all_countries(&self) -> Result<Arc<Vec<Country>>> {
        if let Some(countries) = self.lookup_list(key::ALL_COUNTRIES).await {
            return Ok(countries);
        }

        let pending = {
            let mut slot = self.pending.lock().await;
            match slot.as_ref() {
                Some(pending) => pending.clone(),
                None => {
                    // A fetch may have completed between the miss and the lock
                    let cached = self.cache.read().await.peek(key::ALL_COUNTRIES);
                    if let Some(countries) = cached.and_then(|v| v.as_countries().cloned()) {
                        return Ok(countries);
                    }
                    let pending = self.start_fetch_all();
                    *slot = Some(pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    /// Builds the shared fetch; it stores the dataset on success and frees
    /// the pending slot once resolved.
    fn start_fetch_all(&self) -> PendingFetch {
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let pending = Arc::clone(&self.pending);
        let upstream_fetches = Arc::clone(&self.upstream_fetches);

        async move {
            upstream_fetches.fetch_add(1, Ordering::Relaxed);
            let result = source
                .fetch_all()
                .await
                .inspect_err(|e| error!(error = %e, "upstream fetch failed"))
                .map(Arc::new);

            if let Ok(countries) = &result {
                cache.write().await.set(
                    key::ALL_COUNTRIES,
                    CachedValue::Countries(Arc::clone(countries)),
                );
                info!(count = countries.len(), "cached full country dataset");
            }

            pending.lock().await.take();
            result
        }
        .boxed()
        .shared()
    }

    async fn lookup(&self, cache_key: &str) -> Option<CachedValue> {
        self.cache.write().await.get(cache_key)
    }

    async fn lookup_list(&self, cache_key: &str) -> Option<Arc<Vec<Country>>> {
        self.lookup(cache_key)
            .await
            .and_then(|v| v.as_countries().cloned())
    }

    async fn store_list(&self, cache_key: String, countries: Vec<Country>) -> Arc<Vec<Country>> {
        let countries = Arc::new(countries);
        self.cache
            .write()
            .await
            .set(cache_key, CachedValue::Countries(Arc::clone(&countries)));
        countries
    }

    /// Runs one upstream call, counting it and logging failures.
    async fn fetch<F>(&self, call: F) -> Result<Vec<Country>>
    where
        F: std::future::Future<Output = Result<Vec<Country>>>,
    {
        self.upstream_fetches.fetch_add(1, Ordering::Relaxed);
        call.await.inspect_err(|e| error!(error = %e, "upstream fetch failed"))
    }
}
