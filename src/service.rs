//! Service mode: HTTP upload surface.
//!
//! One route — `POST /process-pdf` — accepts a multipart upload (field
//! `file`), runs the shared pipeline, and answers synchronously:
//!
//! | Condition              | Status | Body                                              |
//! |------------------------|--------|---------------------------------------------------|
//! | success                | 200    | remote endpoint's JSON, verbatim                  |
//! | duplicate content      | 200    | `{"message": "Duplicate file, skipped processing"}` |
//! | non-`.pdf` or missing filename | 400 | `{"message": "Only PDF files are allowed"}`  |
//! | extraction failure     | 400    | `{"message": "Failed to extract text from PDF"}`  |
//! | anything else          | 500    | `{"message": "Error processing PDF: …"}`          |
//!
//! Requests are handled independently under tokio; the dedup gate inside
//! [`Processor`] is the only shared mutable state and is safe under
//! concurrent uploads.

use crate::config::TriageConfig;
use crate::error::TriageError;
use crate::process::{Outcome, Processor};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Build the application router around a shared [`Processor`].
///
/// The body limit comes from [`TriageConfig::max_upload_bytes`]. Exposed
/// separately from [`serve`] so tests can drive the router in-process
/// with `tower::ServiceExt::oneshot`.
pub fn router(processor: Processor, config: &TriageConfig) -> Router {
    Router::new()
        .route("/process-pdf", post(process_pdf))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(Arc::new(processor))
}

/// Bind and serve until the process is interrupted.
pub async fn serve(
    addr: SocketAddr,
    processor: Processor,
    config: &TriageConfig,
) -> Result<(), TriageError> {
    let app = router(processor, config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| TriageError::Server(format!("failed to bind {addr}: {e}")))?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| TriageError::Server(e.to_string()))
}

async fn process_pdf(
    State(processor): State<Arc<Processor>>,
    multipart: Multipart,
) -> Response {
    let (filename, bytes) = match read_upload(multipart).await {
        Ok(upload) => upload,
        Err(msg) => return message_response(StatusCode::BAD_REQUEST, &msg),
    };

    if let Err(e) = require_pdf_name(&filename) {
        warn!("Rejected upload: {e}");
        return message_response(StatusCode::BAD_REQUEST, "Only PDF files are allowed");
    }

    match processor.process_bytes(bytes).await {
        Ok(Outcome::Analyzed(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Outcome::Duplicate) => {
            message_response(StatusCode::OK, "Duplicate file, skipped processing")
        }
        Ok(Outcome::NoText) => {
            message_response(StatusCode::BAD_REQUEST, "Failed to extract text from PDF")
        }
        Err(e) => {
            error!("Error processing PDF '{filename}': {e}");
            message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error processing PDF: {e}"),
            )
        }
    }
}

/// Pull the `file` field out of the multipart form.
///
/// Unknown fields are drained and ignored; a missing file field is a 400.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {e}"))?
    {
        if field.name() != Some("file") {
            let _ = field.bytes().await;
            continue;
        }

        // No declared filename fails the extension gate in the handler.
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| format!("Failed to read file data: {e}"))?
            .to_vec();
        return Ok((filename, bytes));
    }

    Err("No file uploaded".to_string())
}

/// Gate on the declared filename: only `.pdf` (any case) passes.
fn require_pdf_name(filename: &str) -> Result<(), TriageError> {
    if filename.to_ascii_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err(TriageError::NotAPdf {
            name: filename.to_string(),
        })
    }
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
