//! Pipeline orchestration: fingerprint → dedup gate → extract → analyze.
//!
//! [`Processor`] is the shared entry point for both deployment shapes.
//! Service mode constructs it with a dedup gate
//! ([`Processor::with_dedup`]); watcher mode without one — per the system
//! contract, watcher mode makes no at-most-once guarantee and reprocessing
//! the same content produces duplicate remote calls.
//!
//! A document runs through the stages linearly and fully before the next
//! one is handled (watcher mode) or independently per request (service
//! mode). Recoverable conditions come back as [`Outcome`] variants, not
//! errors, so callers match once and never tear down the loop or the
//! server over a single bad document.

use crate::config::TriageConfig;
use crate::dedup::DedupGate;
use crate::error::TriageError;
use crate::pipeline::analyze::AnalysisClient;
use crate::pipeline::{extract, fingerprint};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

/// Result of processing one document.
#[derive(Debug)]
pub enum Outcome {
    /// The remote endpoint's raw JSON reply, passed through unmodified.
    Analyzed(Value),
    /// Byte-identical content was already analyzed during this run
    /// (service mode only); no remote call was made.
    Duplicate,
    /// No text could be extracted; no remote call was made.
    NoText,
}

/// Shared pipeline driver for both deployment shapes.
pub struct Processor {
    client: AnalysisClient,
    gate: Option<DedupGate>,
}

impl Processor {
    /// Processor without duplicate suppression (watcher mode).
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            client: AnalysisClient::new(config),
            gate: None,
        }
    }

    /// Processor with a process-lifetime dedup gate (service mode).
    pub fn with_dedup(config: &TriageConfig) -> Self {
        Self {
            client: AnalysisClient::new(config),
            gate: Some(DedupGate::new()),
        }
    }

    /// Run the full pipeline over raw PDF bytes.
    ///
    /// The fingerprint is claimed before extraction and released again on
    /// any failure, so a failed document does not poison the dedup set
    /// (see [`crate::dedup`] for the policy rationale).
    pub async fn process_bytes(&self, bytes: Vec<u8>) -> Result<Outcome, TriageError> {
        let fp = fingerprint::fingerprint(&bytes);

        if let Some(ref gate) = self.gate {
            if !gate.try_claim(&fp) {
                info!("Duplicate content {} — skipping", &fp[..12]);
                return Ok(Outcome::Duplicate);
            }
        }

        let text = match extract::extract_text(bytes).await {
            Ok(text) => text,
            Err(e @ TriageError::NoText { .. }) => {
                debug!("Extraction failed: {e}");
                self.release(&fp);
                return Ok(Outcome::NoText);
            }
            Err(e) => {
                self.release(&fp);
                return Err(e);
            }
        };

        match self.client.analyze(&text).await {
            Ok(value) => {
                info!("Analysis complete for content {}", &fp[..12]);
                Ok(Outcome::Analyzed(value))
            }
            Err(e) => {
                self.release(&fp);
                Err(e)
            }
        }
    }

    /// Read a PDF from disk and run the pipeline over it.
    pub async fn process_file(&self, path: &Path) -> Result<Outcome, TriageError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| TriageError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        self.process_bytes(bytes).await
    }

    fn release(&self, fingerprint: &str) {
        if let Some(ref gate) = self.gate {
            gate.release(fingerprint);
        }
    }

    /// Number of distinct documents analyzed so far (service mode).
    pub fn dedup_len(&self) -> usize {
        self.gate.as_ref().map(DedupGate::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> TriageConfig {
        TriageConfig::builder()
            .endpoint(endpoint)
            .api_key("k")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn unextractable_bytes_yield_no_text_without_remote_call() {
        // Endpoint is unroutable; reaching it would fail loudly.
        let processor = Processor::with_dedup(&config("http://127.0.0.1:1/never"));
        let outcome = processor
            .process_bytes(b"not a pdf at all".to_vec())
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::NoText));
        // A NoText document must not occupy a dedup slot.
        assert_eq!(processor.dedup_len(), 0);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let processor = Processor::new(&config("http://127.0.0.1:1/never"));
        let err = processor
            .process_file(Path::new("/definitely/not/here.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, TriageError::ReadFailed { .. }));
    }
}
