//! Stage 1: paginated catalog fetch.

use futures::future;
use tracing::debug;

use crate::error::ApiResult;
use crate::traits::CatalogApi;
use crate::types::ProductSummary;

/// Server-defined page size of the search endpoint. Not negotiable.
pub const PAGE_SIZE: u64 = 50;

/// Everything stage 1 collects for a seller.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// All product summaries, concatenated across pages. Order across pages
    /// is not deterministic under concurrent completion; consumers treat
    /// this as a set.
    pub summaries: Vec<ProductSummary>,

    /// Seller-level filter taxonomy from the first page
    pub filters: Vec<serde_json::Value>,

    /// Total reported by the server's paging metadata
    pub total: u64,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// Fetch the complete product list plus the filter taxonomy for a seller.
///
/// The initial request reveals the total; the remaining pages are fetched
/// concurrently with offsets 50, 100, … and merged by concatenation. A
/// failing page fails the whole fetch: a silently truncated catalog would
/// be worse than a loud abort.
pub async fn fetch_catalog<A: CatalogApi>(
    api: &A,
    site_id: &str,
    username: &str,
) -> ApiResult<Catalog> {
    let first = api.search(site_id, username, None).await?;
    let total = first.paging.total;
    let filters = first.available_filters;
    let mut summaries = first.results;

    let total_pages = total.div_ceil(PAGE_SIZE);
    if total_pages > 1 {
        let remaining =
            (1..total_pages).map(|page| api.search(site_id, username, Some(page * PAGE_SIZE)));
        for page in future::try_join_all(remaining).await? {
            summaries.extend(page.results);
        }
    }

    debug!(
        total,
        fetched = summaries.len(),
        pages = total_pages,
        "Catalog fetch complete"
    );

    Ok(Catalog {
        summaries,
        filters,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{sample_product, MockApi};

    #[tokio::test]
    async fn single_page_issues_one_search() {
        let api = MockApi::new().with_products(
            (0..50).map(|i| sample_product(&format!("MLA{i:04}"), 1)).collect(),
        );

        let catalog = fetch_catalog(&api, "MLA", "TIENDA").await.unwrap();

        assert_eq!(catalog.summaries.len(), 50);
        assert_eq!(api.search_calls(), vec![None]);
    }

    #[tokio::test]
    async fn fifty_one_products_paginate_once() {
        let api = MockApi::new().with_products(
            (0..51).map(|i| sample_product(&format!("MLA{i:04}"), 1)).collect(),
        );

        let catalog = fetch_catalog(&api, "MLA", "TIENDA").await.unwrap();

        assert_eq!(catalog.summaries.len(), 51);
        assert_eq!(api.search_calls(), vec![None, Some(50)]);
    }

    #[tokio::test]
    async fn page_failure_fails_the_fetch() {
        let api = MockApi::new()
            .with_products(
                (0..120).map(|i| sample_product(&format!("MLA{i:04}"), 1)).collect(),
            )
            .fail_offset(100);

        let err = fetch_catalog(&api, "MLA", "TIENDA").await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }
}
