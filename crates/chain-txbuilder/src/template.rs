//! Transaction templates and the finalization driver.
//!
//! A template travels between co-signing parties: each runs
//! [`Template::sign`] with the xpubs its signer controls, then whoever
//! holds the completed template runs [`Template::materialize_witnesses`]
//! to install the witness stacks into the transaction inputs.

use serde::{Deserialize, Serialize};

use chain_tx::Transaction;

use crate::signer::SignerFn;
use crate::witness::{DataWitness, KeyId, SignatureWitness, WitnessComponent};
use crate::TxBuilderError;

/// A partially-built transaction plus the instructions for signing it.
#[derive(Clone, Debug, Default)]
pub struct Template {
    /// The transaction skeleton; `None` until the builder attaches one.
    pub transaction: Option<Transaction>,

    /// Per-input signing instructions, at most one per input.
    pub signing_instructions: Vec<SigningInstruction>,

    /// Once true the transaction admits no further structural changes,
    /// and newly inferred signature programs bind the full sighash.
    pub is_final: bool,
}

/// The witness recipe for one transaction input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SigningInstruction {
    /// Index of the input this instruction populates.
    pub position: usize,

    /// Ordered components whose materializations concatenate into the
    /// input witness.
    pub witness_components: Vec<WitnessComponent>,
}

impl SigningInstruction {
    /// Create an instruction for the input at `position` with no
    /// components yet.
    pub fn new(position: usize) -> Self {
        SigningInstruction {
            position,
            witness_components: Vec::new(),
        }
    }

    /// Append an inert data component.
    pub fn add_witness_data(&mut self, data: Vec<u8>) {
        self.witness_components
            .push(WitnessComponent::Data(DataWitness::new(data)));
    }

    /// Append a signature component over `keys` requiring `quorum`
    /// signatures.
    pub fn add_witness_keys(&mut self, keys: Vec<KeyId>, quorum: usize) {
        self.witness_components
            .push(WitnessComponent::Signature(SignatureWitness::new(
                keys, quorum,
            )));
    }
}

impl Template {
    /// Create a template over a transaction skeleton.
    pub fn new(transaction: Transaction) -> Self {
        Template {
            transaction: Some(transaction),
            signing_instructions: Vec::new(),
            is_final: false,
        }
    }

    /// Run every witness component's `sign` against the signer.
    ///
    /// Components are visited in instruction order and receive the
    /// enumeration index of their instruction. The first failure stops
    /// the walk and is annotated with the component and input indexes;
    /// signatures gathered before the failure are retained.
    ///
    /// # Arguments
    /// * `xpubs` - The xpubs this signer can produce signatures for.
    /// * `signer` - The signing callback.
    pub fn sign<F: SignerFn>(
        &mut self,
        xpubs: &[String],
        signer: &F,
    ) -> Result<(), TxBuilderError> {
        // The instructions are detached while their components run so a
        // component can read the template it is part of.
        let mut instructions = std::mem::take(&mut self.signing_instructions);
        let mut result = Ok(());
        'instructions: for (i, instruction) in instructions.iter_mut().enumerate() {
            for (j, component) in instruction.witness_components.iter_mut().enumerate() {
                if let Err(source) = component.sign(&*self, i, xpubs, signer) {
                    result = Err(TxBuilderError::Witness {
                        component: j,
                        input: i,
                        source: Box::new(source),
                    });
                    break 'instructions;
                }
            }
        }
        self.signing_instructions = instructions;
        result
    }

    /// Materialize every witness component and install the resulting
    /// stacks into the transaction inputs.
    ///
    /// Each instruction's components are materialized in order with the
    /// instruction's enumeration index, concatenated, and written to the
    /// input at the instruction's `position`. Component errors are
    /// annotated with both indexes.
    pub fn materialize_witnesses(&mut self) -> Result<(), TxBuilderError> {
        let tx = self
            .transaction
            .as_ref()
            .ok_or(TxBuilderError::MissingRawTx)?;

        if self.signing_instructions.len() > tx.inputs.len() {
            return Err(TxBuilderError::BadInstructionCount);
        }

        let mut materialized = Vec::with_capacity(self.signing_instructions.len());
        for (i, instruction) in self.signing_instructions.iter().enumerate() {
            if instruction.position >= tx.inputs.len() {
                return Err(TxBuilderError::BadTxInputIdx {
                    instruction: i,
                    position: instruction.position,
                });
            }

            let mut witness: Vec<Vec<u8>> = Vec::new();
            for (j, component) in instruction.witness_components.iter().enumerate() {
                let items = component.materialize(self, i).map_err(|source| {
                    TxBuilderError::Witness {
                        component: j,
                        input: i,
                        source: Box::new(source),
                    }
                })?;
                witness.extend(items);
            }
            materialized.push((instruction.position, witness));
        }

        if let Some(tx) = self.transaction.as_mut() {
            for (position, witness) in materialized {
                tx.inputs[position].input_witness = witness;
            }
        }
        Ok(())
    }
}
