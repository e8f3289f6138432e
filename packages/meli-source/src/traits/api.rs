//! Marketplace API seam.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::types::{ItemDescription, ProductDetail, SearchPage};

/// The three marketplace endpoints the pipeline reads from.
///
/// Implemented over HTTP by [`crate::client::RestApi`] and in-memory by
/// [`crate::testing::MockApi`].
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch one page of a seller's products. `offset = None` is the first
    /// page; the server decides the page size.
    async fn search(
        &self,
        site_id: &str,
        nickname: &str,
        offset: Option<u64>,
    ) -> ApiResult<SearchPage>;

    /// Fetch the full catalog record for one item.
    async fn item(&self, item_id: &str) -> ApiResult<ProductDetail>;

    /// Fetch the description text for one item.
    async fn item_description(&self, item_id: &str) -> ApiResult<ItemDescription>;
}
