//! API Module
//!
//! HTTP handlers and routing for the country REST API.
//!
//! # Endpoints
//! - `GET /countries` - Paginated country list
//! - `GET /countries/search` - Search by name, capital, region, timezone
//! - `GET /countries/region/:region` - Countries in a region
//! - `GET /countries/:code` - Country by code
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
