//! Country Cache - A caching proxy for the REST Countries API
//!
//! Fetches the country dataset once per TTL window and serves paginated,
//! per-code, per-region and search views from an in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{CountryError, Result};
pub use service::CountryService;
pub use tasks::spawn_cleanup_task;
