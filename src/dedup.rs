//! In-memory deduplication gate (service mode).
//!
//! A [`DashSet`] of content fingerprints shared across concurrent request
//! handlers. `DashSet::insert` is an atomic check-and-insert, so two
//! simultaneous uploads of the same new content cannot both pass the gate
//! — exactly one claims the fingerprint and proceeds.
//!
//! ## Record policy
//!
//! The fingerprint is claimed *before* extraction and the remote call,
//! and released again if either fails. A failed document therefore stays
//! retryable, while the at-most-once guarantee for the remote endpoint
//! holds under concurrency. The set is scoped to the process lifetime and
//! never persisted.

use dashmap::DashSet;

/// Concurrent set of already-processed content fingerprints.
#[derive(Debug, Default)]
pub struct DedupGate {
    seen: DashSet<String>,
}

impl DedupGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim a fingerprint. Returns `false` if it was already
    /// claimed — the document is a duplicate and must be skipped.
    pub fn try_claim(&self, fingerprint: &str) -> bool {
        self.seen.insert(fingerprint.to_string())
    }

    /// Release a claim after a failed analysis so the document can be
    /// submitted again.
    pub fn release(&self, fingerprint: &str) {
        self.seen.remove(fingerprint);
    }

    /// Number of fingerprints recorded so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
