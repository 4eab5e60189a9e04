//! API Routes
//!
//! Configures the Axum router with all country endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    code_handler, health_handler, list_handler, region_handler, search_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /countries` - Paginated list (`page`, `limit`)
/// - `GET /countries/search` - Filtered list (`name`, `capital`, `region`, `timezone`)
/// - `GET /countries/region/:region` - Countries in a region
/// - `GET /countries/:code` - Single country by code
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin so the browsing UI can call from its own host
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/countries", get(list_handler))
        .route("/countries/search", get(search_handler))
        .route("/countries/region/:region", get(region_handler))
        .route("/countries/:code", get(code_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
