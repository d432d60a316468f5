//! Multi-company product aggregation
//!
//! - `model` - upstream listing and stamped product types
//! - `query` - query parsing, sorting and pagination
//! - `store` - append-only identity-indexed product store
//! - `aggregator` - per-request fan-out and join

pub mod aggregator;
pub mod model;
pub mod query;
pub mod store;

pub use aggregator::ProductAggregator;
pub use model::{Product, ProductListing};
pub use query::{ProductQuery, ProductQueryParams, SortKey, SortOrder, DEFAULT_PAGE_SIZE};
pub use store::ProductStore;

use serde::Serialize;

/// Body of `GET /categories/{category}`
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Default upstream companies
pub fn default_companies() -> Vec<String> {
    ["AMZ", "FLP", "SNP", "MYN", "AZO"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}
