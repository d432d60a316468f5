//! Integration tests for the product aggregation service over HTTP
//!
//! Key behaviors tested:
//! - Fan-out merges every surviving company (partial failure tolerated)
//! - Sorting and pagination through query parameters
//! - Products outside the returned page stay addressable by id
//! - Slow companies are awaited, failing companies are skipped

#[cfg(test)]
mod products_service_tests {
    use {
        async_trait::async_trait,
        serde_json::Value,
        statflow::{
            fetcher::{FetchError, ProductFetcher, ProductFilter},
            products::{ProductAggregator, ProductListing},
            server::routes::products_routes,
        },
        std::{collections::HashSet, sync::Arc, time::Duration},
    };

    /// (company, listing count or failure, artificial delay)
    struct StubCompanies {
        companies: Vec<(&'static str, Option<usize>, u64)>,
    }

    #[async_trait]
    impl ProductFetcher for StubCompanies {
        async fn fetch_products(
            &self,
            company: &str,
            filter: &ProductFilter,
        ) -> Result<Vec<ProductListing>, FetchError> {
            let (_, count, delay_ms) = self
                .companies
                .iter()
                .find(|(name, _, _)| *name == company)
                .copied()
                .ok_or(FetchError::Status(404))?;

            tokio::time::sleep(Duration::from_millis(delay_ms)).await;

            let count = count.ok_or(FetchError::Status(500))?;
            Ok((0..count.min(filter.top))
                .map(|i| ProductListing {
                    product_name: format!("{} {}", filter.category, i),
                    price: 1000 + (i as i64) * 250 + company.len() as i64,
                    rating: 3.0 + (i % 3) as f64 * 0.5,
                    discount: (i as i64 * 7) % 60,
                    availability: if i % 2 == 0 { "yes" } else { "out-of-stock" }.to_string(),
                })
                .filter(|p| filter.max_price == 0 || p.price <= filter.max_price)
                .filter(|p| p.price >= filter.min_price)
                .collect())
        }
    }

    fn aggregator(companies: Vec<(&'static str, Option<usize>, u64)>) -> Arc<ProductAggregator> {
        let names = companies.iter().map(|(c, _, _)| c.to_string()).collect();
        Arc::new(ProductAggregator::new(Arc::new(StubCompanies { companies }), names))
    }

    async fn get(aggregator: &Arc<ProductAggregator>, path: &str) -> (u16, Value) {
        let routes = products_routes(aggregator.clone());
        let response = warp::test::request().method("GET").path(path).reply(&routes).await;

        let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
        (response.status().as_u16(), body)
    }

    fn products(body: &Value) -> &Vec<Value> {
        body["products"].as_array().unwrap()
    }

    #[tokio::test]
    async fn test_three_sources_one_failing() {
        let agg = aggregator(vec![
            ("AMZ", Some(2), 5),
            ("FLP", None, 0),
            ("SNP", Some(3), 1),
        ]);

        let (status, body) = get(&agg, "/categories/Laptop?top=10&page=1").await;
        assert_eq!(status, 200);

        let items = products(&body);
        assert_eq!(items.len(), 5);

        let ids: HashSet<&str> = items.iter().map(|p| p["id"].as_str().unwrap()).collect();
        assert_eq!(ids.len(), 5);
        assert!(items.iter().all(|p| p["company"] != "FLP"));
    }

    #[tokio::test]
    async fn test_all_sources_failing_is_empty_success() {
        let agg = aggregator(vec![("AMZ", None, 0), ("FLP", None, 3)]);

        let (status, body) = get(&agg, "/categories/Phone").await;
        assert_eq!(status, 200);
        assert!(products(&body).is_empty());
    }

    #[tokio::test]
    async fn test_sort_by_price_desc_and_paginate() {
        let agg = aggregator(vec![
            ("AMZ", Some(4), 3),
            ("FLP", Some(4), 0),
            ("MYN", Some(4), 1),
        ]);

        let (status, body) = get(
            &agg,
            "/categories/TV?top=4&sortBy=price&order=desc&page=1&minPrice=1&maxPrice=10000",
        )
        .await;
        assert_eq!(status, 200);

        let prices: Vec<i64> = products(&body)
            .iter()
            .map(|p| p["price"].as_i64().unwrap())
            .collect();
        assert_eq!(prices.len(), 4);
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));

        // 3 companies * 4 listings = 12 merged, so page 3 is the last full page
        let (_, body) = get(&agg, "/categories/TV?top=4&page=3").await;
        assert_eq!(products(&body).len(), 4);

        let (status, body) = get(&agg, "/categories/TV?top=4&page=9").await;
        assert_eq!(status, 200);
        assert!(products(&body).is_empty());
    }

    #[tokio::test]
    async fn test_sort_by_company_ascending() {
        let agg = aggregator(vec![("SNP", Some(2), 0), ("AMZ", Some(2), 2), ("FLP", Some(2), 1)]);

        let (_, body) = get(&agg, "/categories/Mouse?sortBy=company").await;
        let companies: Vec<&str> = products(&body)
            .iter()
            .map(|p| p["company"].as_str().unwrap())
            .collect();

        assert_eq!(companies, vec!["AMZ", "AMZ", "FLP", "FLP", "SNP", "SNP"]);
    }

    #[tokio::test]
    async fn test_lenient_query_defaults() {
        let agg = aggregator(vec![("AMZ", Some(15), 0)]);

        let (status, body) = get(&agg, "/categories/Pendrive?top=abc&page=0&sortBy=bogus").await;
        assert_eq!(status, 200);
        assert_eq!(products(&body).len(), 10);
    }

    #[tokio::test]
    async fn test_lookup_product_outside_page() {
        let agg = aggregator(vec![("AMZ", Some(3), 0), ("AZO", Some(3), 0)]);

        let (_, body) = get(&agg, "/categories/Headset?top=3&page=1").await;
        assert_eq!(products(&body).len(), 3);
        assert_eq!(agg.store().len().await, 6);

        let (_, second_page) = get(&agg, "/categories/Headset?top=3&page=2").await;
        let wanted = products(&second_page)[0].clone();
        let id = wanted["id"].as_str().unwrap();

        let (status, found) = get(&agg, &format!("/categories/Headset/product/{}", id)).await;
        assert_eq!(status, 200);
        assert_eq!(found, wanted);
    }

    #[tokio::test]
    async fn test_lookup_errors() {
        let agg = aggregator(vec![("AMZ", Some(1), 0)]);

        let (status, body) = get(&agg, "/categories/Laptop/product/nope").await;
        assert_eq!(status, 400);
        assert!(body["message"].as_str().unwrap().contains("invalid product id"));

        let missing = uuid::Uuid::new_v4();
        let (status, _) = get(&agg, &format!("/categories/Laptop/product/{}", missing)).await;
        assert_eq!(status, 404);

        assert_eq!(get(&agg, "/categories/Laptop/item/x").await.0, 404);
    }

    #[tokio::test]
    async fn test_slow_sources_are_awaited_concurrently() {
        let agg = aggregator(vec![
            ("AMZ", Some(1), 200),
            ("FLP", Some(1), 200),
            ("SNP", Some(1), 200),
            ("MYN", Some(1), 200),
            ("AZO", Some(1), 200),
        ]);

        let started = std::time::Instant::now();
        let (_, body) = get(&agg, "/categories/Phone").await;

        assert_eq!(products(&body).len(), 5);
        assert!(started.elapsed() < Duration::from_millis(900));
    }
}
