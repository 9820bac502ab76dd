//! Ed25519 signature verification.
//!
//! The core never holds private keys; signing is delegated to an external
//! callback. What the core does need is a pure verification primitive to
//! match witness signatures against the public keys declared in a control
//! program, so only the verifying half of the scheme lives here.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

/// Length in bytes of an Ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Verify an Ed25519 signature over a message.
///
/// Malformed keys or signatures (wrong length, off-curve point) verify as
/// `false` rather than erroring: a witness slot holding garbage is simply
/// not a signature for the key in question.
///
/// # Arguments
/// * `public_key` - The 32-byte Ed25519 public key.
/// * `message` - The message bytes that were signed.
/// * `signature` - The 64-byte signature to check.
///
/// # Returns
/// `true` if the signature is valid for the key and message.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let key_bytes: [u8; PUBLIC_KEY_LEN] = match public_key.try_into() {
        Ok(b) => b,
        Err(_) => return false,
    };
    let key = match VerifyingKey::from_bytes(&key_bytes) {
        Ok(k) => k,
        Err(_) => return false,
    };
    let sig = match Signature::from_slice(signature) {
        Ok(s) => s,
        Err(_) => return false,
    };
    key.verify(message, &sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::RngCore;

    fn test_key() -> SigningKey {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        SigningKey::from_bytes(&seed)
    }

    #[test]
    fn test_verify_valid_signature() {
        let key = test_key();
        let msg = b"deferred predicate hash";
        let sig = key.sign(msg);
        assert!(verify(
            key.verifying_key().as_bytes(),
            msg,
            &sig.to_bytes()
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_message() {
        let key = test_key();
        let sig = key.sign(b"message one");
        assert!(!verify(
            key.verifying_key().as_bytes(),
            b"message two",
            &sig.to_bytes()
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let signer = test_key();
        let other = test_key();
        let msg = b"message";
        let sig = signer.sign(msg);
        assert!(!verify(
            other.verifying_key().as_bytes(),
            msg,
            &sig.to_bytes()
        ));
    }

    #[test]
    fn test_verify_rejects_malformed_inputs() {
        let key = test_key();
        let msg = b"message";
        let sig = key.sign(msg);

        // Truncated key, truncated signature, empty signature slot.
        assert!(!verify(&key.verifying_key().as_bytes()[..16], msg, &sig.to_bytes()));
        assert!(!verify(key.verifying_key().as_bytes(), msg, &sig.to_bytes()[..32]));
        assert!(!verify(key.verifying_key().as_bytes(), msg, &[]));
    }
}
