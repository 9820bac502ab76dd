//! Witness components.
//!
//! A witness component encodes instructions for finalizing one slice of a
//! transaction input's witness. Each component produces zero or more
//! stack items for the input witness of the txinput it corresponds to:
//! inert data travels as a [`DataWitness`], multisig authorization as a
//! [`SignatureWitness`] that gathers signatures over a deferred predicate
//! and later re-verifies them against the input's control program.

use serde::{Deserialize, Serialize};

use chain_primitives::ed25519;
use chain_primitives::hash::sha3_256;
use chain_primitives::HexBytes;
use chain_tx::sighash::SIGHASH_ALL;
use chain_tx::TxError;
use chain_vm::multisig::parse_p2dp_multisig_program;
use chain_vm::opcodes::{OP_EQUAL, OP_TXSIGHASH, OP_VERIFY};
use chain_vm::Builder;

use crate::constraint::{Constraint, PayToConstraint};
use crate::signer::SignerFn;
use crate::template::Template;
use crate::TxBuilderError;

/// A component of an input witness, exchanged between co-signing parties
/// as JSON discriminated on the `type` field.
///
/// Every component supports the same two operations: [`sign`] mutates
/// only the component's own state and may be repeated as more keys
/// become available; [`materialize`] is a pure rendering of the
/// component into witness stack items.
///
/// [`sign`]: WitnessComponent::sign
/// [`materialize`]: WitnessComponent::materialize
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WitnessComponent {
    /// A fixed stack item.
    Data(DataWitness),
    /// A multisig signature gatherer.
    Signature(SignatureWitness),
}

impl WitnessComponent {
    /// Add whatever signatures the available keys allow.
    ///
    /// Idempotent and monotonic: keys already satisfied are skipped, and
    /// signatures stored before an error are kept.
    ///
    /// # Arguments
    /// * `tpl` - The template being signed.
    /// * `index` - Enumeration index of this component's instruction.
    /// * `xpubs` - The xpubs the current signer can produce signatures for.
    /// * `signer` - The signing callback.
    pub fn sign<F: SignerFn>(
        &mut self,
        tpl: &Template,
        index: usize,
        xpubs: &[String],
        signer: &F,
    ) -> Result<(), TxBuilderError> {
        match self {
            WitnessComponent::Data(_) => Ok(()),
            WitnessComponent::Signature(sw) => sw.sign(tpl, index, xpubs, signer),
        }
    }

    /// Render this component into ordered witness stack items.
    ///
    /// Pure with respect to the component: reads the template's input
    /// and the component's own state only.
    ///
    /// # Arguments
    /// * `tpl` - The template being finalized.
    /// * `index` - Enumeration index of this component's instruction.
    pub fn materialize(
        &self,
        tpl: &Template,
        index: usize,
    ) -> Result<Vec<Vec<u8>>, TxBuilderError> {
        match self {
            WitnessComponent::Data(dw) => Ok(vec![dw.data.to_vec()]),
            WitnessComponent::Signature(sw) => sw.materialize(tpl, index),
        }
    }
}

/// An inert witness component: a single fixed stack item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataWitness {
    /// The raw stack item.
    pub data: HexBytes,
}

impl DataWitness {
    /// Create a data witness over the given bytes.
    pub fn new(data: Vec<u8>) -> Self {
        DataWitness { data: data.into() }
    }
}

/// Identity of a signing key: an extended public key plus the derivation
/// path of the concrete child key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyId {
    /// The extended public key, in its string encoding.
    pub xpub: String,
    /// Child indexes from the xpub to the signing key.
    pub derivation_path: Vec<u32>,
}

impl KeyId {
    /// Create a key identity.
    pub fn new(xpub: impl Into<String>, derivation_path: Vec<u32>) -> Self {
        KeyId {
            xpub: xpub.into(),
            derivation_path,
        }
    }
}

/// A multisig witness component.
///
/// Gathers signatures of a deferred predicate from the declared keys.
/// `sigs` is positionally aligned with `keys`; an empty entry means that
/// key has not signed yet, which keeps the wire shape deterministic as
/// parties fill it in independently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignatureWitness {
    /// Number of signatures required by the control program.
    pub quorum: usize,

    /// Identities of the keys that may sign, in declaration order.
    pub keys: Vec<KeyId>,

    /// The deferred predicate whose SHA3-256 digest is what gets signed.
    /// If empty, it is inferred from the transaction on first `sign` and
    /// frozen thereafter.
    #[serde(default)]
    pub program: HexBytes,

    /// Signatures of `program`, aligned to `keys`.
    #[serde(default, rename = "signatures")]
    pub sigs: Vec<HexBytes>,
}

impl SignatureWitness {
    /// Create a signature witness with no program and no signatures yet.
    pub fn new(keys: Vec<KeyId>, quorum: usize) -> Self {
        SignatureWitness {
            quorum,
            keys,
            program: HexBytes::new(),
            sigs: Vec::new(),
        }
    }

    /// Populate `sigs` with as many signatures of the deferred predicate
    /// as the available xpubs allow.
    ///
    /// If `program` is empty it is computed first: a txsighash program
    /// when the template is final, otherwise a predicate constraining the
    /// transaction's maxtime, the current input's outpoint and reference
    /// data, and every output. An inferred program that comes out empty
    /// is an error - there is nothing to commit to.
    ///
    /// Quorum is deliberately not checked here; callers repeat `sign`
    /// with different xpub sets until enough signatures accumulate.
    pub fn sign<F: SignerFn>(
        &mut self,
        tpl: &Template,
        index: usize,
        xpubs: &[String],
        signer: &F,
    ) -> Result<(), TxBuilderError> {
        if self.program.is_empty() {
            let program = build_sig_program(tpl, index)?;
            if program.is_empty() {
                return Err(TxBuilderError::EmptyProgram);
            }
            self.program = program.into();
        }

        if self.sigs.len() < self.keys.len() {
            // Each key may produce one signature; grow the slots while
            // preserving any already present.
            self.sigs.resize(self.keys.len(), HexBytes::new());
        }

        let h = sha3_256(&self.program);
        for (i, key_id) in self.keys.iter().enumerate() {
            if !self.sigs[i].is_empty() {
                // Already have a signature for this key.
                continue;
            }
            if !xpubs.iter().any(|xpub| *xpub == key_id.xpub) {
                continue;
            }
            let sig_bytes = signer(&key_id.xpub, &key_id.derivation_path, &h)
                .map_err(|source| TxBuilderError::Signer {
                    key_index: i,
                    source,
                })?;
            self.sigs[i] = sig_bytes.into();
        }
        Ok(())
    }

    /// Render the witness stack: up to `quorum` signatures selected in
    /// pubkey declaration order, followed by the deferred predicate.
    ///
    /// The input's governing program must parse as P2DP multisig; its
    /// declared pubkeys decide which stored signatures are used and in
    /// what order. Coming up short of quorum is not an error here - the
    /// validation stage owns that judgement.
    pub fn materialize(
        &self,
        tpl: &Template,
        index: usize,
    ) -> Result<Vec<Vec<u8>>, TxBuilderError> {
        let tx = tpl
            .transaction
            .as_ref()
            .ok_or(TxBuilderError::MissingRawTx)?;
        let input = tx.inputs.get(index).ok_or(TxError::InputIndexOutOfRange {
            index,
            len: tx.inputs.len(),
        })?;

        // The governing program: the issuance program for an issuance,
        // the spent output's control program for a spend.
        let (pubkeys, quorum) = parse_p2dp_multisig_program(input.program())?;

        let h = sha3_256(&self.program);
        let mut items: Vec<Vec<u8>> = Vec::with_capacity(quorum + 1);
        for pubkey in &pubkeys {
            if items.len() >= quorum {
                break;
            }
            if let Some(k) = index_sig(pubkey, &h, &self.sigs) {
                items.push(self.sigs[k].to_vec());
            }
        }
        items.push(self.program.to_vec());
        Ok(items)
    }
}

/// Position of the first signature in `sigs` that verifies under `key`.
fn index_sig(key: &[u8; 32], msg: &[u8], sigs: &[HexBytes]) -> Option<usize> {
    sigs.iter().position(|sig| ed25519::verify(key, msg, sig))
}

/// Compute the deferred predicate for the input at `index`.
///
/// A final template yields a program binding the full sighash:
/// `push(sig_hash(index, SIGHASH_ALL)) push(1) OP_TXSIGHASH OP_EQUAL`.
/// Otherwise the constraints derived from the transaction are emitted in
/// order, joined by `OP_VERIFY`, with the last one leaving its boolean
/// on the stack. No constraints means an empty program.
pub(crate) fn build_sig_program(
    tpl: &Template,
    index: usize,
) -> Result<Vec<u8>, TxBuilderError> {
    let tx = tpl
        .transaction
        .as_ref()
        .ok_or(TxBuilderError::MissingRawTx)?;

    if tpl.is_final {
        let h = tx.sig_hash(index, SIGHASH_ALL)?;
        let mut builder = Builder::new();
        builder.add_data(&h);
        builder.add_int64(1).add_op(OP_TXSIGHASH).add_op(OP_EQUAL);
        return Ok(builder.into_program());
    }

    let input = tx.inputs.get(index).ok_or(TxError::InputIndexOutOfRange {
        index,
        len: tx.inputs.len(),
    })?;

    let mut constraints = Vec::with_capacity(3 + tx.outputs.len());
    if tx.max_time > 0 {
        constraints.push(Constraint::Ttl(tx.max_time));
    }
    if let Some(outpoint) = input.outpoint() {
        constraints.push(Constraint::SpendsOutpoint(*outpoint));
    }
    if !input.reference_data.is_empty() {
        constraints.push(Constraint::RefData(input.reference_data.clone()));
    }
    for output in &tx.outputs {
        let ref_data_hash = if output.reference_data.is_empty() {
            None
        } else {
            Some(sha3_256(&output.reference_data))
        };
        constraints.push(Constraint::PayTo(PayToConstraint {
            asset_id: output.asset_id,
            amount: output.amount,
            program: output.control_program.clone(),
            ref_data_hash,
        }));
    }

    let mut program = Vec::new();
    for (i, constraint) in constraints.iter().enumerate() {
        program.extend_from_slice(&constraint.code());
        if i < constraints.len() - 1 {
            // Leave the final bool on top of the stack.
            program.push(OP_VERIFY);
        }
    }
    Ok(program)
}
