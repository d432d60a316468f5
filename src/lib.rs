//! statflow - upstream aggregation services
//!
//! Two independent services built on the same stack:
//!
//! - `numbers_server`: fetches numbers per category and keeps a bounded,
//!   deduplicated window with its running average ([`numbers`])
//! - `products_server`: fans a product query out to every configured company,
//!   merges, sorts and paginates, and remembers each product by identity
//!   ([`products`])
//!
//! Upstream calls go through the [`fetcher`] traits; [`server`] exposes both
//! services over HTTP.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod numbers;
pub mod products;
pub mod server;

pub use error::AggregatorError;
