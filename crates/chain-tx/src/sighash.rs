//! Signature hash computation.
//!
//! When a template is final, signature witnesses commit to the whole
//! transaction through a sighash: the SHA3-256 of a deterministic
//! serialization of everything the flag selects, plus the index of the
//! input being signed. Witness fields are never part of the hash - a
//! signature cannot commit to itself.

use chain_primitives::hash::sha3_256;
use chain_primitives::util::ByteWriter;

use crate::input::InputCommitment;
use crate::transaction::Transaction;
use crate::TxError;

/// Commit to all inputs and all outputs (the default).
pub const SIGHASH_ALL: u8 = 0x01;

/// Commit to all inputs but no outputs.
pub const SIGHASH_NONE: u8 = 0x02;

/// Commit to all inputs and only the output at the signed input's index.
pub const SIGHASH_SINGLE: u8 = 0x03;

/// Compute the signature hash for the input at `index`.
///
/// # Arguments
/// * `tx` - The transaction being signed.
/// * `index` - Index of the input being signed.
/// * `hash_type` - One of the `SIGHASH_*` flags.
///
/// # Returns
/// A 32-byte SHA3-256 digest, or an error if `index` is out of range.
pub fn sig_hash(tx: &Transaction, index: usize, hash_type: u8) -> Result<[u8; 32], TxError> {
    if index >= tx.inputs.len() {
        return Err(TxError::InputIndexOutOfRange {
            index,
            len: tx.inputs.len(),
        });
    }

    let mut writer = ByteWriter::with_capacity(256);
    writer.write_u32_le(tx.version);
    writer.write_u64_le(tx.max_time);

    writer.write_u32_le(tx.inputs.len() as u32);
    for input in &tx.inputs {
        match &input.commitment {
            InputCommitment::Issuance {
                nonce,
                asset_id,
                amount,
                issuance_program,
            } => {
                writer.write_u8(0);
                writer.write_var_bytes(nonce);
                writer.write_bytes(asset_id);
                writer.write_u64_le(*amount);
                writer.write_var_bytes(issuance_program);
            }
            InputCommitment::Spend {
                outpoint,
                asset_id,
                amount,
                control_program,
            } => {
                writer.write_u8(1);
                writer.write_bytes(&outpoint.to_bytes());
                writer.write_bytes(asset_id);
                writer.write_u64_le(*amount);
                writer.write_var_bytes(control_program);
            }
        }
        writer.write_var_bytes(&input.reference_data);
    }

    // The flag selects which outputs are committed.
    match hash_type {
        SIGHASH_NONE => {
            writer.write_u32_le(0);
        }
        SIGHASH_SINGLE => {
            if let Some(output) = tx.outputs.get(index) {
                writer.write_u32_le(1);
                write_output(&mut writer, output);
            } else {
                writer.write_u32_le(0);
            }
        }
        _ => {
            writer.write_u32_le(tx.outputs.len() as u32);
            for output in &tx.outputs {
                write_output(&mut writer, output);
            }
        }
    }

    writer.write_u32_le(index as u32);
    writer.write_u8(hash_type);

    Ok(sha3_256(writer.as_bytes()))
}

fn write_output(writer: &mut ByteWriter, output: &crate::TxOutput) {
    writer.write_bytes(&output.asset_id);
    writer.write_u64_le(output.amount);
    writer.write_var_bytes(&output.control_program);
    writer.write_var_bytes(&output.reference_data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outpoint, TxInput, TxOutput};

    fn sample_tx() -> Transaction {
        let mut tx = Transaction::new();
        tx.max_time = 2000;
        tx.inputs.push(TxInput::spend(
            Outpoint::new([1; 32], 0),
            [2; 32],
            10,
            vec![0x51],
            vec![0xaa],
        ));
        tx.inputs.push(TxInput::issuance(
            vec![9, 9],
            [3; 32],
            7,
            vec![0x52],
            Vec::new(),
        ));
        tx.outputs.push(TxOutput::new([2; 32], 10, vec![0x53]));
        tx
    }

    #[test]
    fn test_deterministic() {
        let tx = sample_tx();
        assert_eq!(
            sig_hash(&tx, 0, SIGHASH_ALL).unwrap(),
            sig_hash(&tx, 0, SIGHASH_ALL).unwrap()
        );
    }

    #[test]
    fn test_commits_to_input_index() {
        let tx = sample_tx();
        assert_ne!(
            sig_hash(&tx, 0, SIGHASH_ALL).unwrap(),
            sig_hash(&tx, 1, SIGHASH_ALL).unwrap()
        );
    }

    #[test]
    fn test_commits_to_hash_type() {
        let tx = sample_tx();
        assert_ne!(
            sig_hash(&tx, 0, SIGHASH_ALL).unwrap(),
            sig_hash(&tx, 0, SIGHASH_NONE).unwrap()
        );
    }

    #[test]
    fn test_all_commits_to_outputs_none_does_not() {
        let mut tx = sample_tx();
        let all_before = sig_hash(&tx, 0, SIGHASH_ALL).unwrap();
        let none_before = sig_hash(&tx, 0, SIGHASH_NONE).unwrap();
        tx.outputs[0].amount += 1;
        assert_ne!(all_before, sig_hash(&tx, 0, SIGHASH_ALL).unwrap());
        assert_eq!(none_before, sig_hash(&tx, 0, SIGHASH_NONE).unwrap());
    }

    #[test]
    fn test_single_commits_to_matching_output_only() {
        let mut tx = sample_tx();
        tx.outputs.push(TxOutput::new([4; 32], 1, vec![0x54]));
        let single_before = sig_hash(&tx, 0, SIGHASH_SINGLE).unwrap();
        tx.outputs[1].amount += 1;
        assert_eq!(single_before, sig_hash(&tx, 0, SIGHASH_SINGLE).unwrap());
        tx.outputs[0].amount += 1;
        assert_ne!(single_before, sig_hash(&tx, 0, SIGHASH_SINGLE).unwrap());
    }

    #[test]
    fn test_witness_not_committed() {
        let mut tx = sample_tx();
        let before = sig_hash(&tx, 0, SIGHASH_ALL).unwrap();
        tx.inputs[0].input_witness = vec![vec![1, 2, 3]];
        assert_eq!(before, sig_hash(&tx, 0, SIGHASH_ALL).unwrap());
    }

    #[test]
    fn test_out_of_range_index() {
        let tx = sample_tx();
        assert!(matches!(
            sig_hash(&tx, 5, SIGHASH_ALL),
            Err(TxError::InputIndexOutOfRange { index: 5, len: 2 })
        ));
    }
}
