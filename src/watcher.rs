//! Watcher mode: react to file-creation events in one directory.
//!
//! A [`notify`] watcher observes the directory (non-recursive) and
//! forwards creation events over a channel to a single serial consumer:
//! each PDF is processed fully — extraction, remote call, sibling JSON
//! write — before the next event is handled. A slow remote call therefore
//! stalls subsequent event delivery; that serialization is intentional.
//!
//! There is no debouncing and no handling of partial writes: a file still
//! being written by another process may be read prematurely. This is an
//! accepted limitation of the design, not a bug to paper over here.
//!
//! The loop runs until Ctrl-C; shutdown drops the watcher without
//! aborting any in-flight document mid-call.

use crate::error::TriageError;
use crate::process::{Outcome, Processor};
use notify::{RecursiveMode, Watcher};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Watch `dir` for newly created PDFs and process each one.
///
/// Returns when Ctrl-C is received or the event channel closes.
pub async fn watch(dir: impl AsRef<Path>, processor: Processor) -> Result<(), TriageError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(TriageError::WatchDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    // The notify backend delivers events on its own thread; an unbounded
    // sender hands them to this task without blocking that thread.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |event: notify::Result<notify::Event>| {
        let _ = tx.send(event);
    })
    .map_err(|e| TriageError::Watch(e.to_string()))?;

    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(|e| TriageError::Watch(e.to_string()))?;

    info!("Watching {} for new PDF files", dir.display());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received — stopping watcher");
                break;
            }
            event = rx.recv() => {
                match event {
                    None => break,
                    Some(Ok(event)) if event.kind.is_create() => {
                        for path in &event.paths {
                            handle_created(&processor, path).await;
                        }
                    }
                    Some(Ok(_)) => {} // modify/remove/etc. are not our concern
                    Some(Err(e)) => warn!("Watch error: {e}"),
                }
            }
        }
    }

    Ok(())
}

/// Process one created path; never propagates so one bad document cannot
/// abort the loop.
pub async fn handle_created(processor: &Processor, path: &Path) {
    if path.is_dir() || !is_pdf_path(path) {
        return;
    }

    info!("New PDF detected: {}", path.display());

    match processor.process_file(path).await {
        Ok(Outcome::Analyzed(result)) => {
            let out_path = analysis_path(path);
            match write_analysis(&out_path, &result).await {
                Ok(()) => info!("Wrote analysis to {}", out_path.display()),
                Err(e) => error!("{e}"),
            }
        }
        Ok(Outcome::NoText) => {
            warn!("No text extracted from {} — skipping", path.display());
        }
        // Watcher processors carry no dedup gate, but stay exhaustive.
        Ok(Outcome::Duplicate) => {
            info!("Duplicate content in {} — skipping", path.display());
        }
        Err(e) => {
            error!("Error processing {}: {e}", path.display());
        }
    }
}

/// True when the path's extension is `pdf`, case-insensitive.
fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Sibling output path: `<stem>_analysis.json` in the source directory.
fn analysis_path(pdf_path: &Path) -> PathBuf {
    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    pdf_path.with_file_name(format!("{stem}_analysis.json"))
}

/// Write the analysis result as indented JSON, overwriting any existing
/// file. Atomic write (temp file + rename) so a crash mid-write never
/// leaves a truncated JSON file behind.
async fn write_analysis(path: &Path, result: &Value) -> Result<(), TriageError> {
    let pretty = serde_json::to_string_pretty(result).map_err(|e| TriageError::Analysis {
        message: format!("result not serialisable: {e}"),
    })?;

    let tmp_path = path.with_extension("json.tmp");
    let write_failed = |e| TriageError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    tokio::fs::write(&tmp_path, pretty.as_bytes())
        .await
        .map_err(write_failed)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(write_failed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_extension_check_is_case_insensitive() {
        assert!(is_pdf_path(Path::new("/in/report.pdf")));
        assert!(is_pdf_path(Path::new("/in/REPORT.PDF")));
        assert!(!is_pdf_path(Path::new("/in/report.txt")));
        assert!(!is_pdf_path(Path::new("/in/report")));
        assert!(!is_pdf_path(Path::new("/in/report.pdf.part")));
    }

    #[test]
    fn analysis_path_is_sibling_with_stem_suffix() {
        assert_eq!(
            analysis_path(Path::new("/inbox/report.pdf")),
            PathBuf::from("/inbox/report_analysis.json")
        );
        assert_eq!(
            analysis_path(Path::new("circular 12.pdf")),
            PathBuf::from("circular 12_analysis.json")
        );
    }

    #[tokio::test]
    async fn write_analysis_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report_analysis.json");

        std::fs::write(&out, "stale").unwrap();
        let result = serde_json::json!({"hardness": "Easy"});
        write_analysis(&out, &result).await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let parsed: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, result);
        // Indented output, not a single line.
        assert!(written.contains('\n'));
    }
}
