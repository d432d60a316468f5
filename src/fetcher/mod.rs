//! Upstream fetchers
//!
//! Each service talks to its upstream through one of these traits. The core
//! aggregators only see `Result<Vec<_>, FetchError>`, so a failed call can never
//! reach the window update or the identity store.
//!
//! Timeouts are the fetcher's responsibility (see [`http`]).

pub mod http;

use {
    crate::{numbers::NumberCategory, products::ProductListing},
    async_trait::async_trait,
    thiserror::Error,
};

pub use http::{HttpNumberFetcher, HttpProductFetcher};

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, timeout, or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),
}

/// Source of fresh numbers for a category
#[async_trait]
pub trait NumberFetcher: Send + Sync {
    async fn fetch_numbers(&self, category: NumberCategory) -> Result<Vec<i64>, FetchError>;
}

/// Filters forwarded to every company on a product query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: String,
    pub min_price: i64,
    pub max_price: i64,
    pub top: usize,
}

/// Source of product listings for one company
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn fetch_products(
        &self,
        company: &str,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductListing>, FetchError>;
}
