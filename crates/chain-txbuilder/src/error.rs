use crate::signer::SignerError;
use chain_tx::TxError;
use chain_vm::VmError;

/// Error types for template signing and finalization.
///
/// Errors are wrapped with positional detail as they cross component
/// boundaries; partial signing progress is always preserved on failure.
#[derive(Debug, thiserror::Error)]
pub enum TxBuilderError {
    /// The template has no transaction skeleton.
    #[error("missing raw transaction")]
    MissingRawTx,

    /// The template has more signing instructions than the transaction
    /// has inputs.
    #[error("too many signing instructions in template")]
    BadInstructionCount,

    /// A signing instruction references an input that is not present.
    /// Carries both the instruction's place in the template and the
    /// input position it named; the two may differ.
    #[error("signing instruction {instruction} references missing tx input {position}")]
    BadTxInputIdx {
        /// Index of the instruction within the template.
        instruction: usize,
        /// The input position the instruction referenced.
        position: usize,
    },

    /// No deferred predicate was supplied and none could be inferred.
    #[error("empty signature program")]
    EmptyProgram,

    /// The signer callback failed for the key at `key_index`.
    #[error("computing signature {key_index}: {source}")]
    Signer {
        /// Position of the failing key in the component's key list.
        key_index: usize,
        /// The callback's error.
        #[source]
        source: SignerError,
    },

    /// The input's control or issuance program is not a P2DP multisig
    /// layout (or another VM-level encoding failure).
    #[error("parsing input program script: {0}")]
    ProgramParse(#[from] VmError),

    /// A witness component failed; annotated with the component index
    /// and the enumeration index of its instruction.
    #[error("witness component {component} of input {input}: {source}")]
    Witness {
        /// Index of the component within its instruction.
        component: usize,
        /// Enumeration index of the instruction.
        input: usize,
        /// The underlying failure.
        #[source]
        source: Box<TxBuilderError>,
    },

    /// A transaction-level failure (e.g. an out-of-range input index).
    #[error(transparent)]
    Tx(#[from] TxError),
}
