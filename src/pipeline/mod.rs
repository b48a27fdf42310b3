//! Pipeline stages for guideline analysis.
//!
//! Each submodule implements exactly one transformation step, keeping
//! every stage independently testable.
//!
//! ## Data Flow
//!
//! ```text
//! bytes ──▶ fingerprint ──▶ extract ──▶ analyze
//! (PDF)     (SHA-256)       (text)     (remote endpoint)
//! ```
//!
//! 1. [`fingerprint`] — content digest used by the service-mode dedup gate
//! 2. [`extract`]     — concatenated page text via `pdf-extract`; runs in
//!    `spawn_blocking` because parsing is CPU-bound
//! 3. [`analyze`]     — the one outbound request/response cycle; the only
//!    stage with network I/O

pub mod analyze;
pub mod extract;
pub mod fingerprint;
