//! Content fingerprinting for duplicate suppression.
//!
//! The fingerprint is computed over the full document bytes *before*
//! extraction, so byte-identical uploads collapse to the same key no
//! matter what filename they arrive under.

use sha2::{Digest, Sha256};

/// SHA-256 digest of the raw document bytes, as lowercase hex.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
