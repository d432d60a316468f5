//! Crate-wide error type shared by both aggregation services

use {crate::fetcher::FetchError, thiserror::Error, uuid::Uuid};

#[derive(Error, Debug)]
pub enum AggregatorError {
    /// Path segment does not name a known number category
    #[error("invalid number type: {0}")]
    UnknownCategory(String),

    /// Upstream call failed; shared state was not touched
    #[error("failed to fetch from upstream: {0}")]
    Upstream(#[from] FetchError),

    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    #[error("product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AggregatorError {
    /// HTTP status code reported to the caller
    pub fn status_code(&self) -> u16 {
        match self {
            AggregatorError::UnknownCategory(_) | AggregatorError::InvalidProductId(_) => 400,
            AggregatorError::ProductNotFound(_) => 404,
            AggregatorError::Upstream(_) => 502,
            AggregatorError::Encode(_) => 500,
        }
    }
}
