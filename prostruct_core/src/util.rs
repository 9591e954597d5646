//! Utility functions.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the input narrative.
///
/// Logged instead of the narrative itself so log lines can be correlated
/// without carrying clinical text.
#[must_use]
pub fn input_fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// First 12 hex characters of [`input_fingerprint`], for log lines.
#[must_use]
pub fn short_fingerprint(text: &str) -> String {
    let mut digest = input_fingerprint(text);
    digest.truncate(12);
    digest
}
