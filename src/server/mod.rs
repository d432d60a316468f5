//! HTTP surface for both services
//!
//! Each runner wires its upstream fetcher into the aggregator, binds, and serves
//! until Ctrl-C. Aggregator state lives in an `Arc` handed to the route filters;
//! nothing is global.

pub mod handlers;
pub mod response;
pub mod routes;

use {
    crate::{
        config::{NumbersConfig, ProductsConfig},
        fetcher::{HttpNumberFetcher, HttpProductFetcher},
        numbers::{NumberWindowService, WindowAggregator},
        products::ProductAggregator,
    },
    std::{net::SocketAddr, sync::Arc},
    warp::{Filter, Reply},
};

pub type ServerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn run_numbers_server(config: NumbersConfig) -> ServerResult {
    let fetcher = HttpNumberFetcher::new(
        config.base_url.clone(),
        config.timeout,
        config.bearer_token.clone(),
    )?;
    let service = Arc::new(NumberWindowService::new(
        Arc::new(fetcher),
        WindowAggregator::new(config.window_size),
    ));

    serve(routes::numbers_routes(service), config.bind_addr, "numbers").await
}

pub async fn run_products_server(config: ProductsConfig) -> ServerResult {
    let fetcher = HttpProductFetcher::new(
        config.base_url.clone(),
        config.timeout,
        config.bearer_token.clone(),
    )?;
    let aggregator = Arc::new(ProductAggregator::new(Arc::new(fetcher), config.companies.clone()));

    serve(routes::products_routes(aggregator), config.bind_addr, "products").await
}

async fn serve<F>(routes: F, bind_addr: SocketAddr, name: &str) -> ServerResult
where
    F: Filter<Error = std::convert::Infallible> + Clone + Send + Sync + 'static,
    F::Extract: Reply,
{
    let (addr, server) = warp::serve(routes).try_bind_with_graceful_shutdown(bind_addr, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    })?;

    log::info!("✅ {} server listening on {}", name, addr);
    server.await;
    log::info!("{} server stopped", name);

    Ok(())
}
