//! Remote analysis: one request/response cycle against the completion
//! endpoint.
//!
//! This module is intentionally thin — all prompt wording lives in
//! [`crate::prompts`] so it can change without touching the wire code
//! here. The endpoint's JSON reply is passed through unmodified: the
//! system performs no response-schema validation, no retries, and no
//! per-request timeout override.

use crate::config::TriageConfig;
use crate::error::TriageError;
use crate::prompts::{analysis_prompt, SYSTEM_PROMPT};
use serde_json::{json, Value};
use tracing::debug;

/// Client for the remote completion endpoint.
///
/// Wraps one shared [`reqwest::Client`] (connection pooling) plus the
/// endpoint URL and static API key from [`TriageConfig`].
#[derive(Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AnalysisClient {
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Build the chat-completion request body for the given extracted text.
    ///
    /// Layout: one system message ("helpful assistant") and one user
    /// message embedding the text and the fixed department list.
    pub fn build_request_body(text: &str) -> Value {
        json!({
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": analysis_prompt(text) },
            ]
        })
    }

    /// Send the extracted text for analysis and return the raw JSON reply.
    ///
    /// Network failure, a non-2xx status, and a non-JSON body all collapse
    /// into [`TriageError::Analysis`]; the caller decides how to surface
    /// it (logged error or HTTP 500).
    pub async fn analyze(&self, text: &str) -> Result<Value, TriageError> {
        let body = Self::build_request_body(text);
        debug!("Sending {} chars of text to {}", text.len(), self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TriageError::Analysis {
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TriageError::Analysis {
                message: format!("endpoint returned HTTP {status}"),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TriageError::Analysis {
                message: format!("response was not valid JSON: {e}"),
            })
    }
}
