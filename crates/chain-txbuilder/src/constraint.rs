//! Constraints for inferred deferred predicates.
//!
//! When a template is not yet final, a signature witness cannot commit to
//! the whole transaction; instead it commits to the aspects that matter
//! through a list of constraints. Each constraint renders a program
//! fragment that leaves a boolean on the VM stack.

use chain_primitives::hash::sha3_256;
use chain_tx::Outpoint;
use chain_vm::opcodes::*;
use chain_vm::Builder;

/// One clause of an inferred deferred predicate.
#[derive(Clone, Debug)]
pub(crate) enum Constraint {
    /// The transaction's maxtime is at most the given time.
    Ttl(u64),
    /// The current input spends the given outpoint.
    SpendsOutpoint(Outpoint),
    /// The current input's reference data hashes to SHA3-256 of the
    /// given bytes.
    RefData(Vec<u8>),
    /// Some output pays the given asset amount to the given program.
    PayTo(PayToConstraint),
}

/// Output-binding constraint parameters.
#[derive(Clone, Debug)]
pub(crate) struct PayToConstraint {
    pub asset_id: [u8; 32],
    pub amount: u64,
    pub program: Vec<u8>,
    /// SHA3-256 of the output's reference data; `None` when the output
    /// has none, which selects the three-argument `OP_FINDOUTPUT` form.
    pub ref_data_hash: Option<[u8; 32]>,
}

impl Constraint {
    /// Render this constraint as a program fragment leaving a boolean on
    /// the stack.
    pub(crate) fn code(&self) -> Vec<u8> {
        let mut builder = Builder::new();
        match self {
            Constraint::Ttl(max_time) => {
                builder
                    .add_int64(*max_time as i64)
                    .add_op(OP_MAXTIME)
                    .add_op(OP_LESSTHANOREQUAL);
            }
            Constraint::SpendsOutpoint(outpoint) => {
                builder
                    .add_data(&outpoint.to_bytes())
                    .add_op(OP_OUTPOINT)
                    .add_op(OP_EQUAL);
            }
            Constraint::RefData(data) => {
                builder
                    .add_data(&sha3_256(data))
                    .add_op(OP_REFDATAHASH)
                    .add_op(OP_EQUAL);
            }
            Constraint::PayTo(pay) => {
                if let Some(hash) = &pay.ref_data_hash {
                    builder.add_data(hash);
                }
                builder
                    .add_int64(pay.amount as i64)
                    .add_data(&pay.asset_id)
                    .add_data(&pay.program);
                builder.add_op(if pay.ref_data_hash.is_some() {
                    OP_FINDOUTPUTDATA
                } else {
                    OP_FINDOUTPUT
                });
            }
        }
        builder.into_program()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_code() {
        let code = Constraint::Ttl(1000).code();
        // push(1000) = [0x02, 0xe8, 0x03]
        assert_eq!(
            code,
            vec![0x02, 0xe8, 0x03, OP_MAXTIME, OP_LESSTHANOREQUAL]
        );
    }

    #[test]
    fn test_outpoint_code() {
        let outpoint = Outpoint::new([0x11; 32], 3);
        let code = Constraint::SpendsOutpoint(outpoint).code();
        let mut expected = vec![36];
        expected.extend_from_slice(&outpoint.to_bytes());
        expected.extend_from_slice(&[OP_OUTPOINT, OP_EQUAL]);
        assert_eq!(code, expected);
    }

    #[test]
    fn test_refdata_code_pushes_digest_not_data() {
        let data = vec![0xaa; 100];
        let code = Constraint::RefData(data.clone()).code();
        let mut expected = vec![32];
        expected.extend_from_slice(&sha3_256(&data));
        expected.extend_from_slice(&[OP_REFDATAHASH, OP_EQUAL]);
        assert_eq!(code, expected);
    }

    #[test]
    fn test_payto_without_refdata() {
        let code = Constraint::PayTo(PayToConstraint {
            asset_id: [0x22; 32],
            amount: 5,
            program: vec![0x51, 0x52],
            ref_data_hash: None,
        })
        .code();
        let mut expected = vec![OP_5, 32];
        expected.extend_from_slice(&[0x22; 32]);
        expected.extend_from_slice(&[0x02, 0x51, 0x52, OP_FINDOUTPUT]);
        assert_eq!(code, expected);
    }

    #[test]
    fn test_payto_with_refdata_prepends_hash() {
        let hash = sha3_256(b"output refdata");
        let code = Constraint::PayTo(PayToConstraint {
            asset_id: [0x22; 32],
            amount: 5,
            program: vec![0x51],
            ref_data_hash: Some(hash),
        })
        .code();
        assert_eq!(code[0], 32);
        assert_eq!(&code[1..33], &hash);
        assert_eq!(*code.last().unwrap(), OP_FINDOUTPUTDATA);
    }
}
