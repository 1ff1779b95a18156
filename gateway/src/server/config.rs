//! Gateway configuration loaded from a YAML file.
//!
//! Mirrors the deployment layout: an `api_server` section for the HTTP
//! surface and a `store_service` section for the backend endpoint.
//!
//! ```yaml
//! api_server:
//!   hostname: "0.0.0.0:8080"
//!   allowed_origins: "*"
//! store_service:
//!   url: "http://store.internal:9090/"
//!   timeout_seconds: 10
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_server: ApiServerConfig,
    pub store_service: StoreServiceConfig,
}

/// HTTP surface settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiServerConfig {
    /// Bind address, `host:port`.
    pub hostname: String,
    /// Value of the `Access-Control-Allow-Origin` response header.
    pub allowed_origins: String,
    /// Reject create requests whose `title` is blank or whitespace-only.
    pub reject_blank_title: bool,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            hostname: "0.0.0.0:8080".to_owned(),
            allowed_origins: "*".to_owned(),
            reject_blank_title: false,
        }
    }
}

/// Store-service endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreServiceConfig {
    /// Base URL of the store service. When absent the gateway serves from
    /// an in-memory fixture store instead of a remote backend.
    pub url: Option<String>,
    /// Per-request timeout for store calls.
    pub timeout_seconds: u64,
}

impl Default for StoreServiceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_seconds: 10,
        }
    }
}

/// Failures while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    /// The file is not valid YAML for this schema.
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl GatewayConfig {
    /// Load and parse configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable or not valid
    /// YAML for this schema.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}
