//! Sorting and pagination over a merged product list

use {
    super::Product,
    serde::Deserialize,
    std::cmp::Ordering,
};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Rating,
    Discount,
    Company,
}

impl SortKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price" => Some(SortKey::Price),
            "rating" => Some(SortKey::Rating),
            "discount" => Some(SortKey::Discount),
            "company" => Some(SortKey::Company),
            _ => None,
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Rating => a.rating.total_cmp(&b.rating),
            SortKey::Discount => a.discount.cmp(&b.discount),
            SortKey::Company => a.company.cmp(&b.company),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only `desc` flips the order
    pub fn from_str(s: &str) -> Self {
        match s {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Raw query string of `GET /categories/{category}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    pub top: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
}

/// Normalized product query
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub min_price: i64,
    pub max_price: i64,
    /// Page size, also forwarded to each company as its `top`
    pub top: usize,
    pub sort_by: Option<SortKey>,
    pub order: SortOrder,
    /// 1-based
    pub page: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            min_price: 0,
            max_price: 0,
            top: DEFAULT_PAGE_SIZE,
            sort_by: None,
            order: SortOrder::Asc,
            page: 1,
        }
    }
}

fn parse_int(value: Option<&String>) -> Option<i64> {
    value.and_then(|s| s.trim().parse().ok())
}

impl ProductQuery {
    /// Lenient parsing: bad or missing numbers fall back to defaults
    pub fn from_params(params: &ProductQueryParams) -> Self {
        let top = parse_int(params.top.as_ref())
            .filter(|&n| n > 0)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let page = parse_int(params.page.as_ref())
            .filter(|&n| n >= 1)
            .map(|n| n as usize)
            .unwrap_or(1);

        Self {
            min_price: parse_int(params.min_price.as_ref()).unwrap_or(0),
            max_price: parse_int(params.max_price.as_ref()).unwrap_or(0),
            top,
            sort_by: params.sort_by.as_deref().and_then(SortKey::from_str),
            order: params
                .order
                .as_deref()
                .map(SortOrder::from_str)
                .unwrap_or_default(),
            page,
        }
    }
}

/// Stable sort by a single key; ties keep their merge order in both directions
pub fn sort_products(products: &mut [Product], key: Option<SortKey>, order: SortOrder) {
    let Some(key) = key else {
        return;
    };

    match order {
        SortOrder::Asc => products.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => products.sort_by(|a, b| key.compare(b, a)),
    }
}

/// Slice bounds for a 1-based page, clamped into `[0, len]`
pub fn page_bounds(len: usize, page: usize, top: usize) -> (usize, usize) {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(top).min(len);
    let end = start.saturating_add(top).min(len);
    (start, end)
}

pub fn paginate(products: Vec<Product>, page: usize, top: usize) -> Vec<Product> {
    let (start, end) = page_bounds(products.len(), page, top);
    products.into_iter().skip(start).take(end - start).collect()
}
