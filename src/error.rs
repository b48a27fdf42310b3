//! Error types for the guideline-triage library.
//!
//! One enum covers the whole pipeline, but the variants fall into two
//! camps that callers treat very differently:
//!
//! * **Recoverable per-document outcomes** — [`TriageError::NoText`] and
//!   [`TriageError::NotAPdf`]. One bad document must never take down the
//!   watcher loop or the server; handlers map these to a warning (watcher
//!   mode) or a 400 response (service mode) and carry on.
//!
//! * **Processing failures** — everything else (network failure, non-2xx
//!   response, unparseable response body, I/O). Also caught at the top of
//!   a single document's processing; surfaced as a logged error or a 500.
//!
//! There is deliberately no retry machinery here: a failed analysis is
//! reported once and the document can simply be re-submitted.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the guideline-triage library.
#[derive(Debug, Error)]
pub enum TriageError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The submitted file does not carry the PDF extension.
    #[error("Only PDF files are allowed (got '{name}')")]
    NotAPdf { name: String },

    /// The file could not be read from disk.
    #[error("Failed to read PDF file '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// No text could be extracted: corrupt file, encrypted content, or a
    /// scanned document with no text layer. Recoverable — no remote call
    /// is made for such a document.
    #[error("Failed to extract text from PDF: {detail}")]
    NoText { detail: String },

    // ── Remote analysis errors ────────────────────────────────────────────
    /// The remote completion endpoint could not be reached, answered with
    /// a non-2xx status, or returned a body that is not JSON.
    #[error("Analysis request failed: {message}")]
    Analysis { message: String },

    // ── Watcher errors ────────────────────────────────────────────────────
    /// The directory given to the watcher does not exist or is not a
    /// directory.
    #[error("Watch directory not found: '{path}'\nCheck the path exists and is a directory.")]
    WatchDirNotFound { path: PathBuf },

    /// The file-system watcher backend reported an error.
    #[error("File watcher error: {0}")]
    Watch(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not write the sibling analysis JSON file.
    #[error("Failed to write analysis file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP listener could not be bound or the server failed.
    #[error("Server error: {0}")]
    Server(String),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TriageError {
    /// True for outcomes a caller should report and move past rather than
    /// treat as a processing failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TriageError::NoText { .. } | TriageError::NotAPdf { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_text_display() {
        let e = TriageError::NoText {
            detail: "no text layer".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Failed to extract text"), "got: {msg}");
    }

    #[test]
    fn not_a_pdf_display_names_file() {
        let e = TriageError::NotAPdf {
            name: "notes.txt".into(),
        };
        assert!(e.to_string().contains("notes.txt"));
    }

    #[test]
    fn recoverable_classification() {
        assert!(TriageError::NoText { detail: "x".into() }.is_recoverable());
        assert!(TriageError::NotAPdf { name: "a".into() }.is_recoverable());
        assert!(!TriageError::Analysis {
            message: "HTTP 502".into()
        }
        .is_recoverable());
    }
}
