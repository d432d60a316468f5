//! reqwest-backed fetchers for the test servers
//!
//! ## Endpoints
//!
//! Numbers:  `GET {base}/{primes|fibo|even|rand}` → `{"numbers": [..]}`
//! Products: `GET {base}/{company}/categories/{category}/products?top=&minPrice=&maxPrice=`
//!           → `[{productName, price, rating, discount, availability}, ..]`

use {
    super::{FetchError, NumberFetcher, ProductFetcher, ProductFilter},
    crate::{numbers::NumberCategory, products::ProductListing},
    async_trait::async_trait,
    serde::Deserialize,
    std::time::Duration,
};

/// Number server response structure
#[derive(Debug, Deserialize)]
struct NumbersPayload {
    numbers: Vec<i64>,
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, FetchError> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

fn authorize(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

async fn send_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, FetchError> {
    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    Ok(response.json().await?)
}

pub struct HttpNumberFetcher {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpNumberFetcher {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        bearer_token: Option<String>,
    ) -> Result<Self, FetchError> {
        let base_url: String = base_url.into();
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    fn url_for(&self, category: NumberCategory) -> String {
        format!("{}/{}", self.base_url, category.as_str())
    }
}

#[async_trait]
impl NumberFetcher for HttpNumberFetcher {
    async fn fetch_numbers(&self, category: NumberCategory) -> Result<Vec<i64>, FetchError> {
        let request = authorize(self.client.get(self.url_for(category)), self.bearer_token.as_deref());
        let payload: NumbersPayload = send_json(request).await?;

        log::debug!("{} returned {} numbers", category, payload.numbers.len());
        Ok(payload.numbers)
    }
}

pub struct HttpProductFetcher {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpProductFetcher {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        bearer_token: Option<String>,
    ) -> Result<Self, FetchError> {
        let base_url: String = base_url.into();
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }
}

#[async_trait]
impl ProductFetcher for HttpProductFetcher {
    async fn fetch_products(
        &self,
        company: &str,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductListing>, FetchError> {
        let url = format!(
            "{}/{}/categories/{}/products",
            self.base_url, company, filter.category
        );
        let request = self.client.get(url).query(&[
            ("top", filter.top.to_string()),
            ("minPrice", filter.min_price.to_string()),
            ("maxPrice", filter.max_price.to_string()),
        ]);

        send_json(authorize(request, self.bearer_token.as_deref())).await
    }
}
