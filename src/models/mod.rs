//! Data model and request/response DTOs for the country cache API
//!
//! This module defines the country record plus the types used for
//! serializing/deserializing HTTP query strings and response bodies.

pub mod country;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use country::{Country, CountryName, Currency, Flags};
pub use requests::{ListParams, SearchFilters, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use responses::{HealthResponse, PaginatedResponse, PaginationMeta, StatsResponse};
