//! API Handlers
//!
//! HTTP request handlers for each country endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    Country, HealthResponse, ListParams, PaginatedResponse, SearchFilters, StatsResponse,
};
use crate::service::CountryService;
use crate::upstream::{CountrySource, RestCountriesClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub countries: CountryService,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(countries: CountryService) -> Self {
        Self { countries }
    }

    /// Builds a fresh store and service over `source`.
    pub fn with_source(source: Arc<dyn CountrySource>, ttl_secs: u64) -> Self {
        let cache = Arc::new(RwLock::new(CacheStore::with_ttl_secs(ttl_secs)));
        Self::new(CountryService::new(cache, source))
    }

    /// Creates a new AppState from configuration, talking to the configured upstream.
    ///
    /// Fails only if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout.max(1)))
            .build()?;
        let source = Arc::new(RestCountriesClient::with_client(
            http,
            config.upstream_url.clone(),
        ));
        Ok(Self::with_source(source, config.cache_ttl))
    }

    /// Shared handle to the cache store.
    pub fn cache(&self) -> Arc<RwLock<CacheStore>> {
        self.countries.cache()
    }
}

/// Handler for GET /countries?page&limit
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedResponse<Country>>> {
    let (page, limit) = params.resolve()?;
    let page = state.countries.get_all(page, limit).await?;
    Ok(Json(page))
}

/// Handler for GET /countries/:code
pub async fn code_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Arc<Country>>> {
    let country = state.countries.get_by_code(&code).await?;
    Ok(Json(country))
}

/// Handler for GET /countries/region/:region
pub async fn region_handler(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<Arc<Vec<Country>>>> {
    let countries = state.countries.get_by_region(&region).await?;
    Ok(Json(countries))
}

/// Handler for GET /countries/search?name&capital&region&timezone
pub async fn search_handler(
    State(state): State<AppState>,
    Query(filters): Query<SearchFilters>,
) -> Result<Json<Arc<Vec<Country>>>> {
    let countries = state.countries.search(filters).await?;
    Ok(Json(countries))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.countries.stats().await)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountryError;
    use crate::upstream::stub::StubSource;

    fn test_state() -> AppState {
        AppState::with_source(StubSource::germany_and_japan().into_arc(), 3600)
    }

    #[tokio::test]
    async fn test_list_handler_defaults() {
        let response = list_handler(State(test_state()), Query(ListParams::default()))
            .await
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.pagination.items_per_page, 10);
        assert_eq!(response.pagination.current_page, 1);
    }

    #[tokio::test]
    async fn test_list_handler_invalid_limit() {
        let params = ListParams {
            page: None,
            limit: Some("0".to_string()),
        };
        let result = list_handler(State(test_state()), Query(params)).await;
        assert!(matches!(result, Err(CountryError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_code_handler() {
        let response = code_handler(State(test_state()), Path("de".to_string()))
            .await
            .unwrap();
        assert_eq!(response.common_name(), "Germany");
    }

    #[tokio::test]
    async fn test_region_handler_not_found() {
        let result = region_handler(State(test_state()), Path("Atlantis".to_string())).await;
        assert!(matches!(result, Err(CountryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_handler() {
        let filters = SearchFilters {
            region: Some("eu".to_string()),
            ..Default::default()
        };
        let response = search_handler(State(test_state()), Query(filters))
            .await
            .unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response[0].common_name(), "Germany");
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.upstream_fetches, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
