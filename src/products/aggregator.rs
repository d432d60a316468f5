//! Concurrent fan-out over every configured company
//!
//! ```text
//! query()
//!   ├─ spawn fetch(AMZ) ─┐
//!   ├─ spawn fetch(FLP) ─┤
//!   ├─ ...               ├─ mpsc ─→ join point: stamp id + company, insert into store
//!   └─ spawn fetch(AZO) ─┘
//!                              ↓
//!                   sort_products() → paginate()
//! ```
//!
//! Source tasks own nothing shared; they only send `(company, result)` back.
//! Merge order follows arrival order at the join point and is not deterministic.

use {
    super::{
        query::{paginate, sort_products, ProductQuery},
        Product, ProductListing, ProductStore,
    },
    crate::{
        error::AggregatorError,
        fetcher::{FetchError, ProductFetcher, ProductFilter},
    },
    std::sync::Arc,
    tokio::sync::mpsc,
    uuid::Uuid,
};

type SourceResult = (String, Result<Vec<ProductListing>, FetchError>);

pub struct ProductAggregator {
    fetcher: Arc<dyn ProductFetcher>,
    companies: Vec<String>,
    store: ProductStore,
}

impl ProductAggregator {
    pub fn new(fetcher: Arc<dyn ProductFetcher>, companies: Vec<String>) -> Self {
        Self {
            fetcher,
            companies,
            store: ProductStore::new(),
        }
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// Fan out, merge, sort and paginate one category query
    ///
    /// Failing companies are logged and skipped. Every merged product is stored
    /// by identity, including those that fall outside the returned page.
    pub async fn query(&self, category: &str, query: &ProductQuery) -> Vec<Product> {
        let filter = ProductFilter {
            category: category.to_string(),
            min_price: query.min_price,
            max_price: query.max_price,
            top: query.top,
        };

        let mut merged = self.fan_out(filter).await;

        sort_products(&mut merged, query.sort_by, query.order);
        paginate(merged, query.page, query.top)
    }

    /// Point lookup by the identity handed out in a previous query
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Product, AggregatorError> {
        let id = Uuid::parse_str(raw_id)
            .map_err(|_| AggregatorError::InvalidProductId(raw_id.to_string()))?;

        self.store
            .get(&id)
            .await
            .ok_or(AggregatorError::ProductNotFound(id))
    }

    async fn fan_out(&self, filter: ProductFilter) -> Vec<Product> {
        let (tx, mut rx) = mpsc::channel::<SourceResult>(self.companies.len().max(1));
        let filter = Arc::new(filter);

        for company in &self.companies {
            let fetcher = self.fetcher.clone();
            let filter = filter.clone();
            let company = company.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let result = fetcher.fetch_products(&company, &filter).await;
                let _ = tx.send((company, result)).await;
            });
        }

        // Channel closes once every source task has reported (or panicked)
        drop(tx);

        let mut merged = Vec::new();
        let mut failed = 0usize;

        while let Some((company, result)) = rx.recv().await {
            match result {
                Ok(listings) => {
                    let products: Vec<Product> = listings
                        .into_iter()
                        .map(|listing| Product::from_listing(listing, &company))
                        .collect();

                    log::debug!("{} returned {} products", company, products.len());
                    self.store.insert_all(&products).await;
                    merged.extend(products);
                }
                Err(e) => {
                    failed += 1;
                    log::warn!("Error fetching products for company {}: {}", company, e);
                }
            }
        }

        log::info!(
            "Merged {} products for {} ({} of {} companies failed)",
            merged.len(),
            filter.category,
            failed,
            self.companies.len()
        );

        merged
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::products::query::{SortKey, SortOrder},
        async_trait::async_trait,
        std::{collections::HashMap, collections::HashSet},
    };

    /// Returns `count` listings per company; `None` means the company fails
    struct FakeFetcher {
        counts: HashMap<String, Option<usize>>,
    }

    impl FakeFetcher {
        fn new(counts: &[(&str, Option<usize>)]) -> Self {
            Self {
                counts: counts
                    .iter()
                    .map(|(company, count)| (company.to_string(), *count))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl ProductFetcher for FakeFetcher {
        async fn fetch_products(
            &self,
            company: &str,
            filter: &ProductFilter,
        ) -> Result<Vec<ProductListing>, FetchError> {
            match self.counts.get(company).copied().flatten() {
                Some(count) => Ok((0..count.min(filter.top))
                    .map(|i| ProductListing {
                        product_name: format!("{}-{}", company, i),
                        price: (i as i64 + 1) * 100,
                        rating: 4.0,
                        discount: i as i64,
                        availability: "yes".to_string(),
                    })
                    .collect()),
                None => Err(FetchError::Status(500)),
            }
        }
    }

    fn aggregator(counts: &[(&str, Option<usize>)]) -> ProductAggregator {
        let companies = counts.iter().map(|(c, _)| c.to_string()).collect();
        ProductAggregator::new(Arc::new(FakeFetcher::new(counts)), companies)
    }

    #[tokio::test]
    async fn test_partial_failure_merges_survivors() {
        let agg = aggregator(&[("AMZ", Some(2)), ("FLP", None), ("SNP", Some(3))]);

        let products = agg.query("Laptop", &ProductQuery::default()).await;

        assert_eq!(products.len(), 5);
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 5);
        assert!(products.iter().all(|p| p.company == "AMZ" || p.company == "SNP"));
    }

    #[tokio::test]
    async fn test_all_sources_failing_is_empty() {
        let agg = aggregator(&[("AMZ", None), ("FLP", None)]);

        let products = agg.query("Phone", &ProductQuery::default()).await;

        assert!(products.is_empty());
        assert!(agg.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_no_companies_is_empty() {
        let agg = aggregator(&[]);
        assert!(agg.query("Phone", &ProductQuery::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_store_keeps_products_outside_page() {
        let agg = aggregator(&[("AMZ", Some(4)), ("FLP", Some(4))]);
        let query = ProductQuery {
            top: 3,
            sort_by: Some(SortKey::Price),
            ..Default::default()
        };

        let page = agg.query("TV", &query).await;

        assert_eq!(page.len(), 3);
        assert_eq!(agg.store().len().await, 6);
        for product in &page {
            assert_eq!(agg.get_by_id(&product.id.to_string()).await.unwrap(), *product);
        }
    }

    #[tokio::test]
    async fn test_sorted_descending_pages() {
        let agg = aggregator(&[("AMZ", Some(5)), ("FLP", Some(5)), ("SNP", Some(5))]);
        let mut query = ProductQuery {
            top: 5,
            sort_by: Some(SortKey::Price),
            order: SortOrder::Desc,
            ..Default::default()
        };

        let first = agg.query("Pendrive", &query).await;
        assert_eq!(first.len(), 5);
        assert!(first.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(first[0].price, 500);

        query.page = 4;
        assert!(agg.query("Pendrive", &query).await.is_empty());
    }

    #[tokio::test]
    async fn test_identities_unique_across_queries() {
        let agg = aggregator(&[("AMZ", Some(3)), ("MYN", Some(3))]);

        let mut ids = HashSet::new();
        for _ in 0..5 {
            for product in agg.query("Mouse", &ProductQuery::default()).await {
                assert!(ids.insert(product.id));
            }
        }

        assert_eq!(agg.store().len().await, 30);
    }

    #[tokio::test]
    async fn test_get_by_id_errors() {
        let agg = aggregator(&[("AMZ", Some(1))]);

        let err = agg.get_by_id("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, AggregatorError::InvalidProductId(_)));

        let missing = Uuid::new_v4();
        let err = agg.get_by_id(&missing.to_string()).await.unwrap_err();
        assert!(matches!(err, AggregatorError::ProductNotFound(id) if id == missing));
    }
}
