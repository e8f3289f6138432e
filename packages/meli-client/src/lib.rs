//! Pure MercadoLibre REST API client.
//!
//! A minimal client for the public MercadoLibre catalog API. Supports seller
//! search with offset pagination, item detail lookups, and item descriptions.
//!
//! # Example
//!
//! ```rust,ignore
//! use meli_client::MeliClient;
//!
//! let client = MeliClient::new();
//!
//! let page = client.search("MLA", "TIENDA_OFICIAL", None).await?;
//! println!("{} products total", page.paging.total);
//! ```

pub mod error;
pub mod types;

pub use error::{MeliError, Result};
pub use types::{ItemDescription, Paging, Picture, ProductDetail, ProductSummary, SearchPage};

use serde::de::DeserializeOwned;

const DEFAULT_API_HOST: &str = "https://api.mercadolibre.com";

pub struct MeliClient {
    client: reqwest::Client,
    api_host: String,
}

impl Default for MeliClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MeliClient {
    /// Create a client against the public API host.
    pub fn new() -> Self {
        Self::with_api_host(DEFAULT_API_HOST)
    }

    /// Create a client against a custom host (mock servers in tests).
    pub fn with_api_host(api_host: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            api_host: api_host.into(),
        }
    }

    /// Fetch one page of a seller's published products.
    ///
    /// `offset = None` requests the first page. The server decides the page
    /// size; `paging.total` on the response tells the caller how many more
    /// offsets to request.
    pub async fn search(
        &self,
        site_id: &str,
        nickname: &str,
        offset: Option<u64>,
    ) -> Result<SearchPage> {
        let mut url = format!(
            "{}/sites/{}/search?nickname={}",
            self.api_host, site_id, nickname
        );
        if let Some(offset) = offset {
            url.push_str(&format!("&offset={}", offset));
        }
        tracing::debug!(site_id, nickname, ?offset, "Fetching search page");
        self.get_json(&url).await
    }

    /// Fetch the full catalog record for one item.
    pub async fn item(&self, item_id: &str) -> Result<ProductDetail> {
        let url = format!("{}/items/{}", self.api_host, item_id);
        self.get_json(&url).await
    }

    /// Fetch the description text for one item.
    pub async fn item_description(&self, item_id: &str) -> Result<ItemDescription> {
        let url = format!("{}/items/{}/description", self.api_host, item_id);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(url, status = status.as_u16(), "API request failed");
            return Err(MeliError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
