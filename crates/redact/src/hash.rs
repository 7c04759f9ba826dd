//! Sender identifier hashing.
//!
//! Raw platform user ids are replaced by a short, stable pseudonym:
//!
//! ```text
//! hex(SHA-256(raw_id_utf8))[..16]
//! ```
//!
//! The digest is unsalted, so the same raw id always maps to the same output
//! across calls and processes. Anyone able to enumerate candidate ids can
//! still link them; this is an opaque identifier, not anonymization.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const HASH_ID_LEN: usize = 16;

/// Hash a raw sender id into a 16-character lowercase hex string.
///
/// # Examples
///
/// ```rust
/// use redact::{hash_id, HASH_ID_LEN};
///
/// let hashed = hash_id("1234567890");
/// assert_eq!(hashed.len(), HASH_ID_LEN);
/// assert_eq!(hashed, hash_id("1234567890"));
/// ```
pub fn hash_id(raw_id: &str) -> String {
    let digest = Sha256::digest(raw_id.as_bytes());
    hex::encode(&digest[..HASH_ID_LEN / 2])
}
