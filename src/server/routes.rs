use {
    super::{handlers, response::handle_rejection},
    crate::{
        numbers::NumberWindowService,
        products::{ProductAggregator, ProductQueryParams},
    },
    std::{convert::Infallible, sync::Arc},
    warp::{self, Filter},
};

pub fn numbers_routes(
    service: Arc<NumberWindowService>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let numbers = warp::path!("numbers" / String)
        .and(warp::get())
        .and(with_state(service))
        .and_then(handlers::get_numbers);

    ping()
        .or(numbers)
        .recover(handle_rejection)
        .with(warp::log("statflow::numbers"))
}

pub fn products_routes(
    aggregator: Arc<ProductAggregator>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let list = warp::path!("categories" / String)
        .and(warp::get())
        .and(warp::query::<ProductQueryParams>())
        .and(with_state(aggregator.clone()))
        .and_then(handlers::list_products);

    let product = warp::path!("categories" / String / "product" / String)
        .and(warp::get())
        .and(with_state(aggregator))
        .and_then(handlers::get_product);

    ping()
        .or(list)
        .or(product)
        .recover(handle_rejection)
        .with(warp::log("statflow::products"))
}

fn ping() -> impl Filter<Extract = (&'static str,), Error = warp::Rejection> + Clone {
    warp::path!("ping").and(warp::get()).map(handlers::ping)
}

fn with_state<T: Send + Sync + 'static>(
    state: Arc<T>,
) -> impl Filter<Extract = (Arc<T>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
