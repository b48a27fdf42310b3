//! Configuration for the triage pipeline.
//!
//! Both deployment shapes share one [`TriageConfig`], built via its
//! [`TriageConfigBuilder`] or read from the environment with
//! [`TriageConfig::from_env`]. Keeping every knob in one struct makes it
//! trivial to share across the server state and the watcher loop, and to
//! log the effective configuration at startup.

use crate::error::TriageError;
use std::fmt;

/// Environment variable holding the static API key.
pub const ENV_API_KEY: &str = "API_KEY";
/// Environment variable holding the completion endpoint URL.
pub const ENV_API_ENDPOINT: &str = "API_ENDPOINT";

/// Configuration for PDF guideline analysis.
///
/// # Example
/// ```rust
/// use guideline_triage::TriageConfig;
///
/// let config = TriageConfig::builder()
///     .endpoint("https://example.azure.com/openai/deployments/x/chat/completions")
///     .api_key("secret")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct TriageConfig {
    /// URL of the remote completion endpoint. Required.
    pub endpoint: String,

    /// Static API key sent in the `api-key` request header. Required.
    pub api_key: String,

    /// Maximum accepted upload size in bytes, enforced by the service
    /// router's body limit. Default: 50 MB.
    ///
    /// Guideline circulars are text-heavy and rarely exceed a few megabytes;
    /// the cap mostly guards against accidental uploads of scanned archives.
    pub max_upload_bytes: usize,
}

impl fmt::Debug for TriageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The API key never appears in logs.
        f.debug_struct("TriageConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl TriageConfig {
    /// Create a new builder.
    pub fn builder() -> TriageConfigBuilder {
        TriageConfigBuilder::default()
    }

    /// Read endpoint and key from `API_ENDPOINT` / `API_KEY`.
    ///
    /// Callers that want `.env` support run `dotenvy::dotenv().ok()` first
    /// (the CLI binary does).
    pub fn from_env() -> Result<Self, TriageError> {
        let endpoint = std::env::var(ENV_API_ENDPOINT).map_err(|_| {
            TriageError::InvalidConfig(format!(
                "{ENV_API_ENDPOINT} is not set.\nSet it to your completion endpoint URL \
                 (environment variable or .env file)."
            ))
        })?;
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| {
            TriageError::InvalidConfig(format!(
                "{ENV_API_KEY} is not set.\nSet it to the static key for your endpoint \
                 (environment variable or .env file)."
            ))
        })?;
        Self::builder().endpoint(endpoint).api_key(api_key).build()
    }

    /// Override the upload cap on an already-built configuration. The
    /// 1 KiB floor still applies.
    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes.max(1024);
        self
    }
}

/// Builder for [`TriageConfig`].
#[derive(Debug)]
pub struct TriageConfigBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
    max_upload_bytes: usize,
}

impl Default for TriageConfigBuilder {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

impl TriageConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes.max(1024);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<TriageConfig, TriageError> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| TriageError::InvalidConfig("endpoint must be set".into()))?;
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| TriageError::InvalidConfig("api_key must be set".into()))?;
        Ok(TriageConfig {
            endpoint,
            api_key,
            max_upload_bytes: self.max_upload_bytes,
        })
    }
}
