//! Typed errors for the MercadoLibre client.

use thiserror::Error;

/// Errors returned by [`crate::MeliClient`].
#[derive(Debug, Error)]
pub enum MeliError {
    /// Transport-level failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, MeliError>;
