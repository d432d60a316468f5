//! Service configuration from environment variables
//!
//! Each binary calls `dotenv::dotenv().ok()` first, so a local `.env` file
//! can supply any of these.

use {
    crate::{numbers::DEFAULT_WINDOW_SIZE, products::default_companies},
    std::{env, net::SocketAddr, str::FromStr, time::Duration},
    thiserror::Error,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Parse `key` if set, otherwise use `default`
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("{} = '{}'", key, raw))),
        None => Ok(default),
    }
}

fn base_url<F>(lookup: &F, key: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = lookup(key).unwrap_or_else(|| default.to_string());

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue(format!(
            "{} must start with http:// or https://",
            key
        )));
    }

    Ok(url)
}

fn bearer_token<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("UPSTREAM_BEARER_TOKEN")
        .map(|t| t.trim().trim_start_matches("Bearer ").to_string())
        .filter(|t| !t.is_empty())
}

/// Configuration for `numbers_server`
#[derive(Debug, Clone)]
pub struct NumbersConfig {
    pub bind_addr: SocketAddr,
    /// Test server root; the category path is appended per request
    pub base_url: String,
    pub timeout: Duration,
    pub window_size: usize,
    pub bearer_token: Option<String>,
}

impl NumbersConfig {
    /// Environment variables:
    /// - `NUMBERS_BIND_ADDR` (default: 0.0.0.0:9876)
    /// - `NUMBERS_BASE_URL` (default: http://20.244.56.144/test)
    /// - `NUMBERS_TIMEOUT_MS` (default: 500)
    /// - `WINDOW_SIZE` (default: 10, must be at least 1)
    /// - `UPSTREAM_BEARER_TOKEN` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let window_size = parse_or(&lookup, "WINDOW_SIZE", DEFAULT_WINDOW_SIZE)?;
        if window_size == 0 {
            return Err(ConfigError::InvalidValue(
                "WINDOW_SIZE must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            bind_addr: parse_or(&lookup, "NUMBERS_BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 9876)))?,
            base_url: base_url(&lookup, "NUMBERS_BASE_URL", "http://20.244.56.144/test")?,
            timeout: Duration::from_millis(parse_or(&lookup, "NUMBERS_TIMEOUT_MS", 500)?),
            window_size,
            bearer_token: bearer_token(&lookup),
        })
    }
}

/// Configuration for `products_server`
#[derive(Debug, Clone)]
pub struct ProductsConfig {
    pub bind_addr: SocketAddr,
    /// Companies root; `/{company}/categories/{category}/products` is appended
    pub base_url: String,
    pub timeout: Duration,
    pub companies: Vec<String>,
    pub bearer_token: Option<String>,
}

impl ProductsConfig {
    /// Environment variables:
    /// - `PRODUCTS_BIND_ADDR` (default: 0.0.0.0:8080)
    /// - `PRODUCTS_BASE_URL` (default: http://20.244.56.144/test/companies)
    /// - `PRODUCTS_TIMEOUT_MS` (default: 10000)
    /// - `PRODUCT_COMPANIES` (comma-separated, default: AMZ,FLP,SNP,MYN,AZO)
    /// - `UPSTREAM_BEARER_TOKEN` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let companies = lookup("PRODUCT_COMPANIES")
            .map(|s| {
                s.split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(default_companies);

        if companies.is_empty() {
            return Err(ConfigError::InvalidValue(
                "PRODUCT_COMPANIES must name at least one company".to_string(),
            ));
        }

        Ok(Self {
            bind_addr: parse_or(&lookup, "PRODUCTS_BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            base_url: base_url(&lookup, "PRODUCTS_BASE_URL", "http://20.244.56.144/test/companies")?,
            timeout: Duration::from_millis(parse_or(&lookup, "PRODUCTS_TIMEOUT_MS", 10_000)?),
            companies,
            bearer_token: bearer_token(&lookup),
        })
    }
}
