//! P2DP-MultiSig control programs.
//!
//! A pay-to-deferred-predicate multisig program commits to a set of
//! Ed25519 public keys and a quorum threshold:
//!
//! ```text
//! push_int(quorum) push(pubkey_1) ... push(pubkey_n) push_int(n) OP_CHECKPREDICATE
//! ```
//!
//! At run time `OP_CHECKPREDICATE` pops a predicate program and `quorum`
//! signatures from the witness, verifies each signature over
//! SHA3-256(predicate) against the declared keys, and then executes the
//! predicate. This module only builds and parses the layout; execution
//! belongs to the consensus interpreter.

use crate::chunk::decode_chunks;
use crate::opcodes::{opcode_name, OP_CHECKPREDICATE};
use crate::{Builder, VmError};

/// Length in bytes of an Ed25519 public key push.
pub const PUBKEY_LEN: usize = 32;

/// Build a P2DP multisig program over `pubkeys` requiring `quorum`
/// signatures.
///
/// # Arguments
/// * `pubkeys` - The 32-byte Ed25519 public keys, in declaration order.
/// * `quorum` - The number of signatures required, `1..=pubkeys.len()`.
///
/// # Returns
/// The program bytes, or `VmError::BadQuorum` if the parameters are out
/// of range.
pub fn p2dp_multisig_program(pubkeys: &[[u8; PUBKEY_LEN]], quorum: usize) -> Result<Vec<u8>, VmError> {
    if quorum == 0 || quorum > pubkeys.len() {
        return Err(VmError::BadQuorum {
            quorum: quorum as i64,
            keys: pubkeys.len() as i64,
        });
    }

    let mut builder = Builder::new();
    builder.add_int64(quorum as i64);
    for pubkey in pubkeys {
        builder.add_data(pubkey);
    }
    builder.add_int64(pubkeys.len() as i64);
    builder.add_op(OP_CHECKPREDICATE);
    Ok(builder.into_program())
}

/// Parse a P2DP multisig program into its public keys and quorum.
///
/// Rejects anything that is not the exact canonical layout: wrong chunk
/// count, a terminal opcode other than `OP_CHECKPREDICATE`, key pushes
/// that are not 32 bytes, a key-count mismatch, or a quorum outside
/// `1..=n`.
///
/// # Arguments
/// * `program` - The control or issuance program bytes.
///
/// # Returns
/// `(pubkeys, quorum)` in declaration order.
pub fn parse_p2dp_multisig_program(program: &[u8]) -> Result<(Vec<[u8; PUBKEY_LEN]>, usize), VmError> {
    let chunks = decode_chunks(program)?;

    // quorum, at least one key, key count, OP_CHECKPREDICATE.
    if chunks.len() < 4 {
        return Err(VmError::BadMultisigProgram(format!(
            "{} chunks, need at least 4",
            chunks.len()
        )));
    }

    let terminal = &chunks[chunks.len() - 1];
    if terminal.op != OP_CHECKPREDICATE || terminal.data.is_some() {
        return Err(VmError::BadMultisigProgram(format!(
            "terminal opcode is {}, not OP_CHECKPREDICATE",
            opcode_name(terminal.op).unwrap_or("a data push")
        )));
    }

    let quorum = chunks[0].as_int64()?;
    let nkeys = chunks[chunks.len() - 2].as_int64()?;

    let key_chunks = &chunks[1..chunks.len() - 2];
    if nkeys != key_chunks.len() as i64 {
        return Err(VmError::BadMultisigProgram(format!(
            "declares {} keys but pushes {}",
            nkeys,
            key_chunks.len()
        )));
    }
    if quorum < 1 || quorum > nkeys {
        return Err(VmError::BadQuorum {
            quorum,
            keys: nkeys,
        });
    }

    let mut pubkeys = Vec::with_capacity(key_chunks.len());
    for chunk in key_chunks {
        let data = chunk.data.as_deref().ok_or_else(|| {
            VmError::BadMultisigProgram("key slot holds an opcode, not a push".to_string())
        })?;
        let pubkey: [u8; PUBKEY_LEN] = data.try_into().map_err(|_| {
            VmError::BadMultisigProgram(format!("key push is {} bytes, not {}", data.len(), PUBKEY_LEN))
        })?;
        pubkeys.push(pubkey);
    }

    Ok((pubkeys, quorum as usize))
}
