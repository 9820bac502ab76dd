//! Transaction input with issuance and spend commitments.
//!
//! An input either issues new units of an asset under an issuance program
//! or spends a prior output under that output's control program. The
//! witness core reads inputs through the accessors here and writes only
//! the `input_witness` field.

use crate::outpoint::Outpoint;

/// A single input in a Chain transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxInput {
    /// Arbitrary reference data; empty when unused. Committed by digest
    /// in inferred deferred predicates.
    pub reference_data: Vec<u8>,

    /// The witness stack: the arguments consensus feeds to this input's
    /// governing program. Populated by the template finalizer.
    pub input_witness: Vec<Vec<u8>>,

    pub(crate) commitment: InputCommitment,
}

/// What an input commits to: an issuance or a spend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputCommitment {
    /// Issue `amount` new units of `asset_id`.
    Issuance {
        /// Anti-replay nonce for the issuance.
        nonce: Vec<u8>,
        /// The asset being issued.
        asset_id: [u8; 32],
        /// Number of units issued.
        amount: u64,
        /// The program authorizing the issuance.
        issuance_program: Vec<u8>,
    },
    /// Spend the output identified by `outpoint`.
    Spend {
        /// The prior output being spent.
        outpoint: Outpoint,
        /// Asset held by the spent output.
        asset_id: [u8; 32],
        /// Amount held by the spent output.
        amount: u64,
        /// The spent output's control program.
        control_program: Vec<u8>,
    },
}

impl TxInput {
    /// Create an issuance input.
    pub fn issuance(
        nonce: Vec<u8>,
        asset_id: [u8; 32],
        amount: u64,
        issuance_program: Vec<u8>,
        reference_data: Vec<u8>,
    ) -> Self {
        TxInput {
            reference_data,
            input_witness: Vec::new(),
            commitment: InputCommitment::Issuance {
                nonce,
                asset_id,
                amount,
                issuance_program,
            },
        }
    }

    /// Create a spend input.
    pub fn spend(
        outpoint: Outpoint,
        asset_id: [u8; 32],
        amount: u64,
        control_program: Vec<u8>,
        reference_data: Vec<u8>,
    ) -> Self {
        TxInput {
            reference_data,
            input_witness: Vec::new(),
            commitment: InputCommitment::Spend {
                outpoint,
                asset_id,
                amount,
                control_program,
            },
        }
    }

    /// Whether this input issues new asset units.
    pub fn is_issuance(&self) -> bool {
        matches!(self.commitment, InputCommitment::Issuance { .. })
    }

    /// The outpoint spent by this input; `None` for an issuance.
    pub fn outpoint(&self) -> Option<&Outpoint> {
        match &self.commitment {
            InputCommitment::Spend { outpoint, .. } => Some(outpoint),
            InputCommitment::Issuance { .. } => None,
        }
    }

    /// The spent output's control program; `None` for an issuance.
    pub fn control_program(&self) -> Option<&[u8]> {
        match &self.commitment {
            InputCommitment::Spend {
                control_program, ..
            } => Some(control_program),
            InputCommitment::Issuance { .. } => None,
        }
    }

    /// The issuance program; `None` for a spend.
    pub fn issuance_program(&self) -> Option<&[u8]> {
        match &self.commitment {
            InputCommitment::Issuance {
                issuance_program, ..
            } => Some(issuance_program),
            InputCommitment::Spend { .. } => None,
        }
    }

    /// The program governing this input: the issuance program for an
    /// issuance, the spent output's control program for a spend.
    pub fn program(&self) -> &[u8] {
        match &self.commitment {
            InputCommitment::Issuance {
                issuance_program, ..
            } => issuance_program,
            InputCommitment::Spend {
                control_program, ..
            } => control_program,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issuance_accessors() {
        let input = TxInput::issuance(
            vec![1, 2, 3],
            [0xaa; 32],
            100,
            vec![0x51],
            vec![0xee],
        );
        assert!(input.is_issuance());
        assert!(input.outpoint().is_none());
        assert!(input.control_program().is_none());
        assert_eq!(input.issuance_program(), Some(&[0x51][..]));
        assert_eq!(input.program(), &[0x51]);
        assert_eq!(input.reference_data, vec![0xee]);
        assert!(input.input_witness.is_empty());
    }

    #[test]
    fn test_spend_accessors() {
        let outpoint = Outpoint::new([0xbb; 32], 2);
        let input = TxInput::spend(outpoint, [0xcc; 32], 5, vec![0x52], Vec::new());
        assert!(!input.is_issuance());
        assert_eq!(input.outpoint(), Some(&outpoint));
        assert_eq!(input.control_program(), Some(&[0x52][..]));
        assert!(input.issuance_program().is_none());
        assert_eq!(input.program(), &[0x52]);
    }
}
