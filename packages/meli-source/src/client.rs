//! HTTP-backed [`CatalogApi`] implementation.

use async_trait::async_trait;
use tracing::debug;

use meli_client::MeliClient;

use crate::error::ApiResult;
use crate::traits::CatalogApi;
use crate::types::{ItemDescription, ProductDetail, SearchPage};

/// Adapter from [`MeliClient`] to the pipeline's [`CatalogApi`] seam.
pub struct RestApi {
    client: MeliClient,
}

impl RestApi {
    /// Create an adapter against the given API host.
    pub fn new(api_host: &str) -> Self {
        Self {
            client: MeliClient::with_api_host(api_host),
        }
    }

    /// Wrap an existing client.
    pub fn from_client(client: MeliClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogApi for RestApi {
    async fn search(
        &self,
        site_id: &str,
        nickname: &str,
        offset: Option<u64>,
    ) -> ApiResult<SearchPage> {
        Ok(self.client.search(site_id, nickname, offset).await?)
    }

    async fn item(&self, item_id: &str) -> ApiResult<ProductDetail> {
        debug!(item_id, "Fetching item detail");
        Ok(self.client.item(item_id).await?)
    }

    async fn item_description(&self, item_id: &str) -> ApiResult<ItemDescription> {
        debug!(item_id, "Fetching item description");
        Ok(self.client.item_description(item_id).await?)
    }
}
