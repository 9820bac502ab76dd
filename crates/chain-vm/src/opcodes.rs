//! Opcode table for the Chain VM.
//!
//! Byte values are consensus-critical: programs are compared and hashed
//! byte-for-byte, so every emitter in the node must agree with this table.
//!
//! Layout follows the classic script convention: 0x01-0x4b are direct
//! data pushes (the opcode byte is the push length), 0x4c-0x4e are the
//! extended pushes, 0x51-0x60 push the small integers 1-16. Above that
//! sit the generic stack/compare ops, the signature ops at 0xa0-0xbf, and
//! the transaction-introspection ops at 0xc0-0xcf.

/// Push an empty byte string (also the integer 0).
pub const OP_0: u8 = 0x00;

/// Lowest direct data push; pushes 1 byte.
pub const OP_DATA_1: u8 = 0x01;
/// Highest direct data push; pushes 75 bytes.
pub const OP_DATA_75: u8 = 0x4b;

/// Push data with a 1-byte length prefix.
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Push data with a 2-byte LE length prefix.
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Push data with a 4-byte LE length prefix.
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Push the integer -1.
pub const OP_1NEGATE: u8 = 0x4f;

/// Push the integer 1.
pub const OP_1: u8 = 0x51;
/// Push the integer 2.
pub const OP_2: u8 = 0x52;
/// Push the integer 3.
pub const OP_3: u8 = 0x53;
/// Push the integer 4.
pub const OP_4: u8 = 0x54;
/// Push the integer 5.
pub const OP_5: u8 = 0x55;
/// Push the integer 6.
pub const OP_6: u8 = 0x56;
/// Push the integer 7.
pub const OP_7: u8 = 0x57;
/// Push the integer 8.
pub const OP_8: u8 = 0x58;
/// Push the integer 9.
pub const OP_9: u8 = 0x59;
/// Push the integer 10.
pub const OP_10: u8 = 0x5a;
/// Push the integer 11.
pub const OP_11: u8 = 0x5b;
/// Push the integer 12.
pub const OP_12: u8 = 0x5c;
/// Push the integer 13.
pub const OP_13: u8 = 0x5d;
/// Push the integer 14.
pub const OP_14: u8 = 0x5e;
/// Push the integer 15.
pub const OP_15: u8 = 0x5f;
/// Push the integer 16.
pub const OP_16: u8 = 0x60;

/// Pop the top item; fail the program unless it is true.
pub const OP_VERIFY: u8 = 0x69;

/// Pop two items; push whether they are byte-equal.
pub const OP_EQUAL: u8 = 0x87;

/// Pop two numbers a, b; push whether a <= b.
pub const OP_LESSTHANOREQUAL: u8 = 0xa1;

/// Pop a predicate and `quorum` signatures from the witness; verify the
/// signatures over SHA3-256(predicate) against the declared pubkeys, then
/// execute the predicate. The terminal opcode of a P2DP multisig program.
pub const OP_CHECKPREDICATE: u8 = 0xad;

/// Pop a version number and a hash; push whether the hash equals the
/// transaction's sighash for the current input under that version.
pub const OP_TXSIGHASH: u8 = 0xae;

/// Push the transaction's maxtime.
pub const OP_MAXTIME: u8 = 0xc1;

/// Push the serialized outpoint spent by the current input; fails on an
/// issuance input.
pub const OP_OUTPOINT: u8 = 0xc2;

/// Push the SHA3-256 of the current input's reference data.
pub const OP_REFDATAHASH: u8 = 0xc3;

/// Pop (program, asset, amount); push whether some output pays at least
/// `amount` of `asset` to `program`.
pub const OP_FINDOUTPUT: u8 = 0xc4;

/// Pop (program, asset, amount, refdatahash); as `OP_FINDOUTPUT`, but the
/// matching output's reference data must also hash to `refdatahash`.
pub const OP_FINDOUTPUTDATA: u8 = 0xc5;

/// The canonical name of an opcode, if it has one in this table.
///
/// Direct data pushes report as `None`; they are lengths, not names.
pub fn opcode_name(op: u8) -> Option<&'static str> {
    let name = match op {
        OP_0 => "OP_0",
        OP_PUSHDATA1 => "OP_PUSHDATA1",
        OP_PUSHDATA2 => "OP_PUSHDATA2",
        OP_PUSHDATA4 => "OP_PUSHDATA4",
        OP_1NEGATE => "OP_1NEGATE",
        OP_1 => "OP_1",
        OP_2 => "OP_2",
        OP_3 => "OP_3",
        OP_4 => "OP_4",
        OP_5 => "OP_5",
        OP_6 => "OP_6",
        OP_7 => "OP_7",
        OP_8 => "OP_8",
        OP_9 => "OP_9",
        OP_10 => "OP_10",
        OP_11 => "OP_11",
        OP_12 => "OP_12",
        OP_13 => "OP_13",
        OP_14 => "OP_14",
        OP_15 => "OP_15",
        OP_16 => "OP_16",
        OP_VERIFY => "OP_VERIFY",
        OP_EQUAL => "OP_EQUAL",
        OP_LESSTHANOREQUAL => "OP_LESSTHANOREQUAL",
        OP_CHECKPREDICATE => "OP_CHECKPREDICATE",
        OP_TXSIGHASH => "OP_TXSIGHASH",
        OP_MAXTIME => "OP_MAXTIME",
        OP_OUTPOINT => "OP_OUTPOINT",
        OP_REFDATAHASH => "OP_REFDATAHASH",
        OP_FINDOUTPUT => "OP_FINDOUTPUT",
        OP_FINDOUTPUTDATA => "OP_FINDOUTPUTDATA",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_ranges_do_not_overlap_named_ops() {
        // Direct pushes own 0x01-0x4b; every named opcode lives outside it.
        for op in [
            OP_VERIFY,
            OP_EQUAL,
            OP_LESSTHANOREQUAL,
            OP_CHECKPREDICATE,
            OP_TXSIGHASH,
            OP_MAXTIME,
            OP_OUTPOINT,
            OP_REFDATAHASH,
            OP_FINDOUTPUT,
            OP_FINDOUTPUTDATA,
        ] {
            assert!(!(OP_DATA_1..=OP_DATA_75).contains(&op));
            assert!(opcode_name(op).is_some());
        }
    }

    #[test]
    fn test_every_small_int_is_named() {
        for op in OP_1..=OP_16 {
            assert!(opcode_name(op).is_some());
        }
        assert!(opcode_name(OP_DATA_1).is_none());
        assert!(opcode_name(0x20).is_none());
    }
}
