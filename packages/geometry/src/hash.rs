//! Stable group-key digests.
//!
//! Grouped features need an identifier that survives row reordering;
//! a content digest of the group key gives equal keys equal identifiers
//! across runs. Collisions are cryptographically negligible and not
//! handled specially.

use sha1::{Digest, Sha1};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 20;

/// Returns the SHA-1 digest of a group key.
#[must_use]
pub fn group_key_digest(key: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_vector() {
        let digest = group_key_digest("abc");
        assert_eq!(
            hex::encode(digest),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn hashes_empty_key() {
        let digest = group_key_digest("");
        assert_eq!(
            hex::encode(digest),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(group_key_digest("route-66"), group_key_digest("route-66"));
        assert_ne!(group_key_digest("route-66"), group_key_digest("route-67"));
    }
}
