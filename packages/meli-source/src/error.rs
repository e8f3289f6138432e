//! Typed errors for the source pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while sourcing a seller's catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A required configuration field is missing
    #[error("missing required config field: {field}")]
    MissingConfig { field: &'static str },

    /// The catalog search failed as a whole (initial request or a page)
    #[error("catalog fetch failed: {0}")]
    Catalog(#[from] ApiError),

    /// Node payload serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The node sink rejected a node
    #[error("node sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from a [`crate::traits::CatalogApi`] implementation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The marketplace answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<meli_client::MeliError> for ApiError {
    fn from(err: meli_client::MeliError) -> Self {
        match err {
            meli_client::MeliError::Api { status, message } => ApiError::Api { status, message },
            other => ApiError::Http(Box::new(other)),
        }
    }
}

/// Which step of the enrichment chain failed for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichStage {
    Detail,
    Description,
}

impl std::fmt::Display for EnrichStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrichStage::Detail => write!(f, "detail"),
            EnrichStage::Description => write!(f, "description"),
        }
    }
}

/// A captured per-product enrichment failure.
///
/// One product failing never aborts the batch; the failure is surfaced in
/// the sync report with enough structure to assert on the reason.
#[derive(Debug, Error)]
#[error("item {item_id}: {stage} fetch failed: {source}")]
pub struct EnrichError {
    /// Marketplace identifier of the product that was dropped
    pub item_id: String,
    /// Step of the chain that failed
    pub stage: EnrichStage,
    #[source]
    pub source: ApiError,
}

impl EnrichError {
    pub fn new(item_id: impl Into<String>, stage: EnrichStage, source: ApiError) -> Self {
        Self {
            item_id: item_id.into(),
            stage,
            source,
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Result type alias for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
