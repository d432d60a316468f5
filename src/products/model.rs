use {
    serde::{Deserialize, Serialize},
    uuid::Uuid,
};

/// Product as returned by one company's upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub product_name: String,
    pub price: i64,
    pub rating: f64,
    pub discount: i64,
    pub availability: String,
}

/// Listing stamped with its source company and a fresh identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: String,
    pub price: i64,
    pub rating: f64,
    pub discount: i64,
    pub availability: String,
    pub company: String,
    pub id: Uuid,
}

impl Product {
    /// Mint a new product from an upstream listing
    pub fn from_listing(listing: ProductListing, company: &str) -> Self {
        Self {
            product_name: listing.product_name,
            price: listing.price,
            rating: listing.rating,
            discount: listing.discount,
            availability: listing.availability,
            company: company.to_string(),
            id: Uuid::new_v4(),
        }
    }
}
