//! Transaction output carrying an asset amount and a control program.

/// A single output in a Chain transaction.
///
/// Each output locks `amount` units of `asset_id` under `control_program`
/// (for value destined to multisig holders, a P2DP multisig program).
/// `reference_data` is arbitrary caller data committed by its SHA3-256
/// digest wherever the protocol binds it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOutput {
    /// The 32-byte ID of the asset being locked.
    pub asset_id: [u8; 32],

    /// Number of asset units.
    pub amount: u64,

    /// The control program defining spending conditions.
    pub control_program: Vec<u8>,

    /// Arbitrary reference data; empty when unused.
    pub reference_data: Vec<u8>,
}

impl TxOutput {
    /// Create an output with empty reference data.
    pub fn new(asset_id: [u8; 32], amount: u64, control_program: Vec<u8>) -> Self {
        TxOutput {
            asset_id,
            amount,
            control_program,
            reference_data: Vec::new(),
        }
    }
}
