//! Core transaction type for the Chain protocol.
//!
//! A transaction skeleton as the witness core sees it: ordered inputs and
//! outputs plus the maxtime window. Witness construction mutates only the
//! per-input witness stacks; everything else is settled by the builder
//! that produced the skeleton.

use crate::input::TxInput;
use crate::output::TxOutput;
use crate::sighash;
use crate::TxError;

/// Current transaction serialization version.
pub const CURRENT_VERSION: u32 = 1;

/// A Chain transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version.
    pub version: u32,

    /// Latest time (Unix milliseconds) at which the transaction may be
    /// included in a block; 0 means no limit.
    pub max_time: u64,

    /// Ordered list of inputs.
    pub inputs: Vec<TxInput>,

    /// Ordered list of outputs.
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    /// Create an empty transaction with the current version and no
    /// maxtime limit.
    pub fn new() -> Self {
        Transaction {
            version: CURRENT_VERSION,
            max_time: 0,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Compute the signature hash committing to this transaction for the
    /// input at `index` under `hash_type`.
    ///
    /// See [`sighash::sig_hash`].
    pub fn sig_hash(&self, index: usize, hash_type: u8) -> Result<[u8; 32], TxError> {
        sighash::sig_hash(self, index, hash_type)
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
