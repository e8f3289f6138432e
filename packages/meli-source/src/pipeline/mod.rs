//! The two-stage sync pipeline.
//!
//! Stage 1 ([`catalog`]) paginates the seller search into a full product
//! list. Stage 2 ([`enrich`]) fans out one task per product and joins all
//! of them. [`source`] runs both stages and emits nodes.

pub mod catalog;
pub mod enrich;
pub mod source;

pub use catalog::{fetch_catalog, Catalog, PAGE_SIZE};
pub use enrich::{
    enrich_one, enrich_products, ENRICH_CONCURRENCY, IMAGE_CAP_BATCH_THRESHOLD,
    MAX_IMAGES_LARGE_BATCH, SLOW_BATCH_THRESHOLD,
};
pub use source::{source_nodes, SyncReport};
