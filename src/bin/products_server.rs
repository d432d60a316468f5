//! Product Aggregation Server
//!
//! Serves `GET /categories/{category}` and `GET /categories/{category}/product/{id}`:
//! queries every configured company concurrently, merges and sorts the results,
//! and keeps each product addressable by its generated id.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin products_server
//! ```
//!
//! ## Environment Variables
//!
//! - PRODUCTS_BIND_ADDR - Listen address (default: 0.0.0.0:8080)
//! - PRODUCTS_BASE_URL - Companies root (default: http://20.244.56.144/test/companies)
//! - PRODUCTS_TIMEOUT_MS - Per-company timeout in milliseconds (default: 10000)
//! - PRODUCT_COMPANIES - Comma-separated company codes (default: AMZ,FLP,SNP,MYN,AZO)
//! - UPSTREAM_BEARER_TOKEN - Access token sent upstream (optional)
//! - RUST_LOG - Logging level (optional, default: info)

use statflow::{config::ProductsConfig, logging::init_logger, server};

#[tokio::main]
async fn main() -> server::ServerResult {
    dotenv::dotenv().ok();
    init_logger();

    let config = ProductsConfig::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        e
    })?;

    log::info!("🚀 Starting Product Aggregation Server");
    log::info!("   Upstream: {}", config.base_url);
    log::info!("   Companies: {}", config.companies.join(", "));
    log::info!("   Timeout: {}ms", config.timeout.as_millis());

    server::run_products_server(config).await
}
