//! The signing capability.
//!
//! The core never holds private keys. Whoever drives a template supplies
//! a callback that can produce a signature for an `(xpub, derivation
//! path)` identity over a 32-byte message hash - routed to a local
//! keystore, a remote HSM, or a user prompt as the caller sees fit.
//! Passing the capability by argument keeps components testable and lets
//! different inputs use different signers.

/// Errors reported by a signer callback.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    /// The signing request was cancelled before completing (e.g. a
    /// remote call's deadline or cancellation fired mid-flight).
    #[error("signing request cancelled")]
    Cancelled,

    /// The signer failed outright.
    #[error("signer failure: {0}")]
    Failure(String),
}

/// The signer callback contract: `(xpub, derivation_path, msg_hash)` to
/// signature bytes.
///
/// Implemented automatically by any matching closure. The callback may
/// block (a remote HSM round-trip); no other core operation does.
pub trait SignerFn: Fn(&str, &[u32], &[u8; 32]) -> Result<Vec<u8>, SignerError> {}

impl<F> SignerFn for F where F: Fn(&str, &[u32], &[u8; 32]) -> Result<Vec<u8>, SignerError> {}
