//! MercadoLibre seller catalog source pipeline.
//!
//! Fetches a seller's complete product catalog from the MercadoLibre REST
//! API, enriches each product with its description and image metadata, and
//! hands the results to a node sink as content-addressed records.
//!
//! Two sequential stages:
//!
//! 1. **Catalog fetch** — paginate the seller search endpoint into the full
//!    product list plus the seller's filter taxonomy.
//! 2. **Enrichment** — fan out one task per product (detail + description
//!    fetched concurrently, images and thumbnail derived), join all, emit
//!    one taxonomy node and one node per enriched product.
//!
//! One product failing drops only that product; the failure is captured on
//! the [`SyncReport`] with its item id and failing stage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use meli_source::{client::RestApi, sinks::MemorySink, source_nodes, SourceConfig};
//!
//! let config = SourceConfig::new("MLA", "TIENDA_OFICIAL");
//! let api = RestApi::new(&config.api_host);
//! let sink = MemorySink::new();
//!
//! let report = source_nodes(&config, &api, &sink).await?;
//! println!("{} products imported", report.products_imported);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (CatalogApi, NodeSink)
//! - [`types`] - Domain types and node derivation
//! - [`pipeline`] - The two-stage sync pipeline
//! - [`sinks`] - Node sink implementations (MemorySink)
//! - [`client`] - HTTP-backed CatalogApi over `meli-client`
//! - [`testing`] - Mock implementations for testing

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sinks;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use config::SourceConfig;
pub use error::{ApiError, EnrichError, EnrichStage, Result, SourceError};
pub use pipeline::{
    enrich_products, fetch_catalog, source_nodes, Catalog, SyncReport, PAGE_SIZE,
};
pub use traits::{CatalogApi, NodeSink};
pub use types::{
    filters_node, product_node, EnrichedProduct, ImageRef, Node, FILTERS_NODE_TYPE,
    PRODUCT_NODE_TYPE,
};

// Re-export sinks
pub use sinks::MemorySink;

// Re-export testing utilities
pub use testing::MockApi;
