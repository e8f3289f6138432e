use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of results from `/sites/{site_id}/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub paging: Paging,
    pub results: Vec<ProductSummary>,
    /// Seller-level facet metadata. Carried opaque: the host only indexes it.
    #[serde(default)]
    pub available_filters: Vec<serde_json::Value>,
}

/// Pagination metadata from the search endpoint.
///
/// `limit` is server-defined (observed as 50) and not negotiable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    pub total: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
}

/// A single search result. Only the identifier is load-bearing; the full
/// record comes from `/items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub permalink: Option<String>,
    pub thumbnail: Option<String>,
}

/// Full catalog record from `/items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub currency_id: Option<String>,
    pub condition: Option<String>,
    pub permalink: Option<String>,
    pub sold_quantity: Option<u64>,
    pub available_quantity: Option<u64>,
    pub date_created: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pictures: Vec<Picture>,
    #[serde(default)]
    pub attributes: Vec<serde_json::Value>,
}

/// Picture variation metadata attached to a product detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Picture {
    pub id: Option<String>,
    pub url: Option<String>,
    /// HTTPS variant; the largest variation of the image.
    pub secure_url: Option<String>,
    pub size: Option<String>,
    pub max_size: Option<String>,
}

/// Description text from `/items/{id}/description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDescription {
    pub plain_text: Option<String>,
    /// Legacy HTML description, present on older listings.
    pub text: Option<String>,
}
