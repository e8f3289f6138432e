//! Orchestration: fetch, enrich, emit nodes.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::SourceConfig;
use crate::error::{EnrichError, Result, SourceError};
use crate::pipeline::catalog::fetch_catalog;
use crate::pipeline::enrich::{
    enrich_products, IMAGE_CAP_BATCH_THRESHOLD, MAX_IMAGES_LARGE_BATCH, SLOW_BATCH_THRESHOLD,
};
use crate::traits::{CatalogApi, NodeSink};
use crate::types::{filters_node, product_node};

/// What one sync run produced.
#[derive(Debug)]
pub struct SyncReport {
    /// Products the catalog reported
    pub products_total: usize,

    /// Products that enriched successfully and became nodes
    pub products_imported: usize,

    /// Nodes handed to the sink, taxonomy node included
    pub nodes_created: usize,

    /// Per-product failures, captured with item id and failing stage
    pub failures: Vec<EnrichError>,

    pub finished_at: DateTime<Utc>,
}

impl SyncReport {
    fn new(products_total: usize) -> Self {
        Self {
            products_total,
            products_imported: 0,
            nodes_created: 0,
            failures: Vec::new(),
            finished_at: Utc::now(),
        }
    }

    /// True when every product in the catalog became a node.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run one full sync: validate config, fetch the catalog, enrich every
/// product, and emit one taxonomy node plus one node per enriched product.
///
/// An empty catalog is reported, not fatal: the run logs a warning and
/// returns a zero report with no nodes created. Per-product failures are
/// logged, dropped from the output, and surfaced on the report. Nothing in
/// here ever hard-exits the process.
pub async fn source_nodes<A, S>(config: &SourceConfig, api: &A, sink: &S) -> Result<SyncReport>
where
    A: CatalogApi,
    S: NodeSink,
{
    if let Err(err) = config.validate() {
        warn!(%err, "Refusing to sync without required configuration");
        return Err(err);
    }

    let catalog = fetch_catalog(api, &config.site_id, &config.username)
        .await
        .map_err(|err| {
            warn!(
                site_id = %config.site_id,
                username = %config.username,
                %err,
                "Catalog search failed; check the seller search endpoint"
            );
            SourceError::Catalog(err)
        })?;

    if catalog.is_empty() {
        warn!(
            site_id = %config.site_id,
            username = %config.username,
            "API returned 0 products; check the configuration options and \
             make sure the user has published products"
        );
        return Ok(SyncReport::new(0));
    }

    let total = catalog.summaries.len();
    info!(total, "Importing from Mercado Libre");
    if total > SLOW_BATCH_THRESHOLD {
        info!(total, "Importing a lot of products; this may take a while");
    }
    if total > IMAGE_CAP_BATCH_THRESHOLD {
        info!(cap = MAX_IMAGES_LARGE_BATCH, "Limiting images per product");
    }

    let results = enrich_products(api, &catalog.summaries).await;

    let mut report = SyncReport::new(total);

    sink.create_node(filters_node(&config.site_id, &catalog.filters)?)
        .await?;
    report.nodes_created += 1;

    for result in results {
        match result {
            Ok(product) => {
                sink.create_node(product_node(&product)?).await?;
                report.products_imported += 1;
                report.nodes_created += 1;
            }
            Err(err) => {
                warn!(item_id = %err.item_id, %err, "Dropping product that failed to enrich");
                report.failures.push(err);
            }
        }
    }

    report.finished_at = Utc::now();
    info!(
        imported = report.products_imported,
        failed = report.failures.len(),
        nodes = report.nodes_created,
        "Sync complete"
    );

    Ok(report)
}
