//! Plugin configuration.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

const DEFAULT_API_HOST: &str = "https://api.mercadolibre.com";

/// Configuration for one sync run.
///
/// `site_id` and `username` are both required; a missing field aborts the
/// run before any network call. Unknown keys injected by the host are
/// ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Marketplace site, e.g. "MLA" for Argentina
    #[serde(default)]
    pub site_id: String,

    /// Seller nickname whose published products are sourced
    #[serde(default)]
    pub username: String,

    /// API host override, for mock servers in tests
    #[serde(default = "default_api_host")]
    pub api_host: String,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

impl SourceConfig {
    /// Create a config with the default API host.
    pub fn new(site_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            username: username.into(),
            api_host: default_api_host(),
        }
    }

    /// Override the API host.
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    /// Check required fields, reporting the first one missing.
    pub fn validate(&self) -> Result<(), SourceError> {
        if self.username.is_empty() {
            return Err(SourceError::MissingConfig { field: "username" });
        }
        if self.site_id.is_empty() {
            return Err(SourceError::MissingConfig { field: "site_id" });
        }
        Ok(())
    }
}
