//! Service Module
//!
//! The country query cache and the pure helpers it is built from.

mod countries;
pub mod filter;
pub mod pagination;


pub use countries::{CountryService, COUNTRY_NOT_FOUND_MESSAGE, SEARCH_NOT_FOUND_MESSAGE};
pub use filter::SearchMatcher;
pub use pagination::paginate;
