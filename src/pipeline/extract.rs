//! Text extraction: PDF bytes to concatenated page text.
//!
//! Backed by the `pdf-extract` crate, which returns the whole document as
//! one string in page order. Extraction failure — corrupt file, encrypted
//! content, scanned pages with no text layer — is reported as
//! [`TriageError::NoText`], a recoverable outcome. Callers reject the
//! document with a "no text" result instead of crashing.
//!
//! Parsing is CPU-bound and `pdf-extract` is known to panic on some
//! malformed inputs, so the work runs in `spawn_blocking`: the panic is
//! contained in the blocking task and surfaces as `NoText` rather than
//! unwinding through the event loop.

use crate::error::TriageError;
use tracing::debug;

/// Extract the concatenation of extractable text from every page.
///
/// Whitespace-only output counts as no text: a scanned circular with no
/// text layer must not be sent to the remote endpoint as an empty prompt.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, TriageError> {
    let size = bytes.len();
    let parsed =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match parsed {
        Ok(Ok(text)) => {
            if text.trim().is_empty() {
                return Err(TriageError::NoText {
                    detail: "document contains no extractable text (no text layer?)".into(),
                });
            }
            debug!("Extracted {} chars from {} PDF bytes", text.len(), size);
            Ok(text)
        }
        Ok(Err(e)) => Err(TriageError::NoText {
            detail: e.to_string(),
        }),
        // The parser panicked; treat it the same as any unreadable PDF.
        Err(_) => Err(TriageError::NoText {
            detail: "PDF parser failed on malformed input".into(),
        }),
    }
}
