use {
    super::Product,
    std::collections::HashMap,
    tokio::sync::RwLock,
    uuid::Uuid,
};

/// Append-only product lookup keyed by identity
///
/// Entries are never updated or evicted; the map grows for the process lifetime.
#[derive(Default)]
pub struct ProductStore {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a batch under one write lock
    pub async fn insert_all(&self, products: &[Product]) {
        if products.is_empty() {
            return;
        }

        let mut store = self.products.write().await;
        for product in products {
            store.entry(product.id).or_insert_with(|| product.clone());
        }
    }

    pub async fn get(&self, id: &Uuid) -> Option<Product> {
        self.products.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}
