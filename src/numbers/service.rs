use {
    super::{NumberCategory, WindowAggregator},
    crate::{error::AggregatorError, fetcher::NumberFetcher},
    serde::Serialize,
    std::sync::Arc,
};

/// Body of `GET /numbers/{category}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersResponse {
    pub numbers: Vec<i64>,
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    pub avg: f64,
}

/// Ties the number fetcher to the window aggregator for one request
pub struct NumberWindowService {
    fetcher: Arc<dyn NumberFetcher>,
    aggregator: WindowAggregator,
}

impl NumberWindowService {
    pub fn new(fetcher: Arc<dyn NumberFetcher>, aggregator: WindowAggregator) -> Self {
        Self {
            fetcher,
            aggregator,
        }
    }

    pub fn aggregator(&self) -> &WindowAggregator {
        &self.aggregator
    }

    /// Fetch fresh numbers for `raw_category` and fold them into its window
    ///
    /// Validation and fetch errors return before the window lock is taken.
    pub async fn handle(&self, raw_category: &str) -> Result<NumbersResponse, AggregatorError> {
        let category = NumberCategory::from_path(raw_category)
            .ok_or_else(|| AggregatorError::UnknownCategory(raw_category.to_string()))?;

        log::debug!("Handling request for number type: {}", category);

        let numbers = self.fetcher.fetch_numbers(category).await.map_err(|e| {
            log::warn!("Failed to fetch numbers for {}: {}", category, e);
            AggregatorError::from(e)
        })?;

        let update = self.aggregator.update(category, &numbers).await;

        Ok(NumbersResponse {
            numbers,
            window_prev_state: update.previous,
            window_curr_state: update.current,
            avg: update.average,
        })
    }
}
