//! Digest labels for relabeled output headers.

use sha1::{Digest, Sha1};

/// Lowercase hex SHA-1 of the sequence bytes.
pub fn sha1_hex(sequence: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(sequence);
    hex::encode(hasher.finalize())
}

/// Lowercase hex MD5 of the sequence bytes.
pub fn md5_hex(sequence: &[u8]) -> String {
    format!("{:x}", md5::compute(sequence))
}
