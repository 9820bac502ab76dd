//! Hash function primitives for the Chain protocol.
//!
//! The protocol commits to data exclusively through SHA3-256: deferred
//! predicates are identified by their SHA3-256 digest, reference data is
//! bound by its digest, and the transaction sighash is a SHA3-256 over the
//! committed serialization.

use sha3::{Digest, Sha3_256};

/// Compute the SHA3-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA3-256 digest.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- SHA3-256 ----

    #[test]
    fn test_sha3_256_empty_string() {
        let hash = sha3_256(b"");
        assert_eq!(
            hex::encode(hash),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_sha3_256_abc() {
        let hash = sha3_256(b"abc");
        assert_eq!(
            hex::encode(hash),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }
}
