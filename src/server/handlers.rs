use {
    super::response::{json_reply, reject},
    crate::{
        numbers::NumberWindowService,
        products::{ProductAggregator, ProductQuery, ProductQueryParams, ProductsResponse},
    },
    std::sync::Arc,
    warp::{reply::Response, Rejection},
};

pub fn ping() -> &'static str {
    "pong"
}

/// `GET /numbers/{category}`
pub async fn get_numbers(
    category: String,
    service: Arc<NumberWindowService>,
) -> Result<Response, Rejection> {
    let body = service.handle(&category).await.map_err(reject)?;
    json_reply(&body).map_err(reject)
}

/// `GET /categories/{category}?top=&minPrice=&maxPrice=&sortBy=&order=&page=`
pub async fn list_products(
    category: String,
    params: ProductQueryParams,
    aggregator: Arc<ProductAggregator>,
) -> Result<Response, Rejection> {
    let query = ProductQuery::from_params(&params);
    log::debug!("Product query for {}: {:?}", category, query);

    let products = aggregator.query(&category, &query).await;
    json_reply(&ProductsResponse { products }).map_err(reject)
}

/// `GET /categories/{category}/product/{id}`
///
/// Identities are global, so the category segment is not consulted.
pub async fn get_product(
    _category: String,
    id: String,
    aggregator: Arc<ProductAggregator>,
) -> Result<Response, Rejection> {
    let product = aggregator.get_by_id(&id).await.map_err(reject)?;
    json_reply(&product).map_err(reject)
}
