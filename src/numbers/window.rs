//! Bounded, deduplicated number window per category

use {
    super::NumberCategory,
    std::collections::{HashMap, HashSet},
    tokio::sync::Mutex,
};

pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Result of one window update
#[derive(Debug, Clone, PartialEq)]
pub struct WindowUpdate {
    pub previous: Vec<i64>,
    pub current: Vec<i64>,
    pub average: f64,
}

/// Per-category sliding windows behind a single lock
///
/// Every update holds the lock from snapshot to store, so the `previous`
/// state handed back is exactly the `current` state of the update before it.
pub struct WindowAggregator {
    capacity: usize,
    windows: Mutex<HashMap<NumberCategory, Vec<i64>>>,
}

impl WindowAggregator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Merge freshly fetched values into the category's window
    pub async fn update(&self, category: NumberCategory, new_values: &[i64]) -> WindowUpdate {
        log::info!("Fetched numbers for type {}: {:?}", category, new_values);

        let (previous, current) = {
            let mut windows = self.windows.lock().await;
            let window = windows.entry(category).or_default();

            let previous = window.clone();
            let mut combined = previous.clone();
            combined.extend_from_slice(new_values);

            let mut current = dedup_stable(combined);
            if current.len() > self.capacity {
                current.drain(..current.len() - self.capacity);
            }

            *window = current.clone();
            (previous, current)
        };

        let average = average(&current);
        WindowUpdate {
            previous,
            current,
            average,
        }
    }

    /// Current window contents (empty if never updated)
    pub async fn snapshot(&self, category: NumberCategory) -> Vec<i64> {
        self.windows
            .lock()
            .await
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for WindowAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

/// Drop repeated values, keeping the first occurrence of each
fn dedup_stable(values: Vec<i64>) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(values.len());
    values.into_iter().filter(|n| seen.insert(*n)).collect()
}

/// Arithmetic mean; 0.0 for an empty window
pub fn average(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&n| n as f64).sum::<f64>() / values.len() as f64
}
