/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TxError {
    /// An operation referenced an input index past the end of the inputs.
    #[error("input index {index} out of range (tx has {len} inputs)")]
    InputIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of inputs in the transaction.
        len: usize,
    },
}
