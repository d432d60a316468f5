//! Number Window Server
//!
//! Serves `GET /numbers/{p|f|e|r}`: fetches fresh numbers from the test server,
//! folds them into a bounded deduplicated window, and returns the window before
//! and after together with its average.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin numbers_server
//! ```
//!
//! ## Environment Variables
//!
//! - NUMBERS_BIND_ADDR - Listen address (default: 0.0.0.0:9876)
//! - NUMBERS_BASE_URL - Test server root (default: http://20.244.56.144/test)
//! - NUMBERS_TIMEOUT_MS - Upstream timeout in milliseconds (default: 500)
//! - WINDOW_SIZE - Window capacity (default: 10)
//! - UPSTREAM_BEARER_TOKEN - Access token sent upstream (optional)
//! - RUST_LOG - Logging level (optional, default: info)

use statflow::{config::NumbersConfig, logging::init_logger, server};

#[tokio::main]
async fn main() -> server::ServerResult {
    dotenv::dotenv().ok();
    init_logger();

    let config = NumbersConfig::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        e
    })?;

    log::info!("🚀 Starting Number Window Server");
    log::info!("   Upstream: {}", config.base_url);
    log::info!("   Timeout: {}ms", config.timeout.as_millis());
    log::info!("   Window size: {}", config.window_size);
    log::info!(
        "   Bearer token: {}",
        if config.bearer_token.is_some() { "set" } else { "not set" }
    );

    server::run_numbers_server(config).await
}
