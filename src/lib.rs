//! # guideline-triage
//!
//! Summarise banking guideline PDFs through a hosted LLM endpoint.
//!
//! New regulatory circulars arrive as PDFs — dropped into a shared folder
//! or uploaded by a client. For each one, this crate extracts the text
//! layer and asks a remote completion endpoint for a short structured
//! summary: implementation hardness (Easy/Medium/Hard), who approved the
//! guideline, when it was published, and which of twenty bank departments
//! it belongs to.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Acquire      file-creation event or multipart upload
//!  ├─ 2. Fingerprint  SHA-256 over raw bytes (dedup gate, service mode)
//!  ├─ 3. Extract      concatenated page text via pdf-extract
//!  ├─ 4. Analyze      one POST to the completion endpoint (api-key header)
//!  └─ 5. Deliver      HTTP response, or sibling <stem>_analysis.json
//! ```
//!
//! ## Two deployment shapes, one pipeline
//!
//! * **Watcher mode** ([`watch`]) — long-running process reacting to
//!   file-creation events in one directory; results written next to the
//!   source PDF.
//! * **Service mode** ([`serve`]) — axum server with a single
//!   `POST /process-pdf` route; byte-identical uploads are analyzed at
//!   most once per process lifetime.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guideline_triage::{Processor, TriageConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TriageConfig::from_env()?; // API_KEY + API_ENDPOINT
//!     let processor = Processor::new(&config);
//!     guideline_triage::watch("./incoming", processor).await?;
//!     Ok(())
//! }
//! ```
//!
//! The remote reply is passed through as opaque JSON — no schema is
//! enforced, no retries are attempted, and failed documents can simply be
//! re-submitted.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod prompts;
pub mod service;
pub mod watcher;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{TriageConfig, TriageConfigBuilder};
pub use dedup::DedupGate;
pub use error::TriageError;
pub use pipeline::analyze::AnalysisClient;
pub use pipeline::extract::extract_text;
pub use pipeline::fingerprint::fingerprint;
pub use process::{Outcome, Processor};
pub use service::{router, serve};
pub use watcher::watch;
