//! Sliding-window number statistics
//!
//! ```text
//! GET /numbers/{category}
//!     ↓
//! NumberCategory::from_path()     (unknown → 400, nothing mutated)
//!     ↓
//! NumberFetcher::fetch_numbers()  (failure → 502, nothing mutated)
//!     ↓
//! WindowAggregator::update()      (single lock: snapshot, append, dedup, truncate, average)
//!     ↓
//! NumbersResponse
//! ```

pub mod service;
pub mod window;

pub use service::{NumberWindowService, NumbersResponse};
pub use window::{WindowAggregator, WindowUpdate, DEFAULT_WINDOW_SIZE};

use std::fmt;

/// Number kinds served by the upstream test server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl NumberCategory {
    /// Upstream path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberCategory::Prime => "primes",
            NumberCategory::Fibonacci => "fibo",
            NumberCategory::Even => "even",
            NumberCategory::Random => "rand",
        }
    }

    /// Accepts both the single-letter id (`p`, `f`, `e`, `r`) and the full name
    pub fn from_path(s: &str) -> Option<Self> {
        match s {
            "p" | "primes" => Some(NumberCategory::Prime),
            "f" | "fibo" => Some(NumberCategory::Fibonacci),
            "e" | "even" => Some(NumberCategory::Even),
            "r" | "rand" => Some(NumberCategory::Random),
            _ => None,
        }
    }

    pub fn all() -> [NumberCategory; 4] {
        [
            NumberCategory::Prime,
            NumberCategory::Fibonacci,
            NumberCategory::Even,
            NumberCategory::Random,
        ]
    }
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
