//! Content-hashed asset names.
//!
//! The stylesheet and the motion runtime are written as `style.<hash>.css`
//! and `motion.<hash>.js`, where `<hash>` is the first [`FINGERPRINT_LEN`]
//! hex digits of the SHA-256 of the file contents. A changed palette or
//! runtime yields a new filename, so hosts can serve both with long-lived
//! cache headers.

use sha2::{Digest, Sha256};

/// Hex digits kept from the digest.
pub const FINGERPRINT_LEN: usize = 8;

/// Short hex digest of `content`.
pub fn fingerprint(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{byte:02x}"));
    }
    hex.truncate(FINGERPRINT_LEN);
    hex
}

/// `stem.<hash>.ext` for the given contents.
pub fn fingerprinted_name(stem: &str, ext: &str, content: &[u8]) -> String {
    format!("{stem}.{}.{ext}", fingerprint(content))
}

/// Whether `name` has the `stem.<hash>.ext` shape [`fingerprinted_name`] produces.
pub fn is_fingerprinted(name: &str, stem: &str, ext: &str) -> bool {
    let hash = name
        .strip_prefix(stem)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.strip_suffix(ext))
        .and_then(|rest| rest.strip_suffix('.'));
    hash.is_some_and(|h| {
        h.len() == FINGERPRINT_LEN && h.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    })
}
