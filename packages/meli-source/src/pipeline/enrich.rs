//! Stage 2: per-product fan-out enrichment.

use futures::future;
use futures::stream::{self, StreamExt};

use crate::error::{EnrichError, EnrichStage};
use crate::traits::CatalogApi;
use crate::types::{EnrichedProduct, ProductSummary};

/// Batches over this size log a "this may take a while" notice.
pub const SLOW_BATCH_THRESHOLD: usize = 50;

/// Batches over this size cap images per product.
pub const IMAGE_CAP_BATCH_THRESHOLD: usize = 300;

/// Per-product image cap applied to large batches.
pub const MAX_IMAGES_LARGE_BATCH: usize = 3;

/// How many products are enriched at a time.
pub const ENRICH_CONCURRENCY: usize = 8;

/// Enrich every product in the batch, one bounded task per product.
///
/// Each slot resolves independently: a failed product yields an
/// [`EnrichError`] carrying its item id and the failing stage, and never
/// aborts the rest of the batch. All tasks are joined before returning;
/// result order is not meaningful.
pub async fn enrich_products<A: CatalogApi>(
    api: &A,
    summaries: &[ProductSummary],
) -> Vec<Result<EnrichedProduct, EnrichError>> {
    let image_cap =
        (summaries.len() > IMAGE_CAP_BATCH_THRESHOLD).then_some(MAX_IMAGES_LARGE_BATCH);

    stream::iter(summaries.iter().map(|summary| enrich_one(api, &summary.id, image_cap)))
        .buffer_unordered(ENRICH_CONCURRENCY)
        .collect()
        .await
}

/// Enrich one product: detail and description are fetched concurrently,
/// then images and the thumbnail are derived from the detail's pictures.
pub async fn enrich_one<A: CatalogApi>(
    api: &A,
    item_id: &str,
    image_cap: Option<usize>,
) -> Result<EnrichedProduct, EnrichError> {
    let (detail, description) =
        future::join(api.item(item_id), api.item_description(item_id)).await;

    let detail =
        detail.map_err(|e| EnrichError::new(item_id, EnrichStage::Detail, e))?;
    let description =
        description.map_err(|e| EnrichError::new(item_id, EnrichStage::Description, e))?;

    Ok(EnrichedProduct::from_parts(detail, Some(description), image_cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_product, MockApi};

    #[tokio::test]
    async fn failed_detail_is_isolated_to_its_slot() {
        let api = MockApi::new()
            .with_products(vec![
                sample_product("MLA0001", 1),
                sample_product("MLA0002", 1),
                sample_product("MLA0003", 1),
            ])
            .fail_item("MLA0002");

        let results = enrich_products(&api, &api.summaries()).await;

        let failed: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].item_id, "MLA0002");
        assert_eq!(failed[0].stage, EnrichStage::Detail);
    }

    #[tokio::test]
    async fn failed_description_reports_its_stage() {
        let api = MockApi::new()
            .with_products(vec![sample_product("MLA0001", 1)])
            .fail_description("MLA0001");

        let err = enrich_one(&api, "MLA0001", None).await.unwrap_err();
        assert_eq!(err.stage, EnrichStage::Description);
    }

    #[tokio::test]
    async fn small_batches_keep_every_image() {
        let api = MockApi::new().with_products(vec![sample_product("MLA0001", 5)]);

        let results = enrich_products(&api, &api.summaries()).await;
        let product = results[0].as_ref().unwrap();
        assert_eq!(product.item_images.len(), 5);
    }
}
