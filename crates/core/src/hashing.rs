//! Manual identity digest.
//!
//! The backend keys every processed manual by a SHA-1 hex digest of the PDF
//! bytes truncated to 12 characters. Computing the same digest locally lets
//! the CLI predict a manual's key before uploading it.

use sha1::{Digest, Sha1};

/// Number of hex characters in a manual hash.
pub const HASH_LEN: usize = 12;

/// Compute the short SHA-1 hex digest of the given bytes.
///
/// Returns the first [`HASH_LEN`] characters of the full 40-character
/// digest, lowercase.
pub fn short_sha1_hex(data: &[u8]) -> String {
    let hash = Sha1::digest(data);
    let mut hex = format!("{hash:x}");
    hex.truncate(HASH_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_known_hash() {
        // First 12 chars of sha1("") = da39a3ee5e6b4b0d...
        assert_eq!(short_sha1_hex(b""), "da39a3ee5e6b");
    }

    #[test]
    fn known_vector() {
        // sha1("hello world") = 2aae6c35c94fcfb415dbe95f408b9ce91ee846ed
        assert_eq!(short_sha1_hex(b"hello world"), "2aae6c35c94f");
    }

    #[test]
    fn consistent_output() {
        let data = b"%PDF-1.7 fake manual bytes";
        assert_eq!(short_sha1_hex(data), short_sha1_hex(data));
        assert_eq!(short_sha1_hex(data).len(), HASH_LEN);
    }
}
