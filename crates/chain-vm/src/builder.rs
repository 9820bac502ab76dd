//! VM program builder.
//!
//! Accumulates a single byte sequence of canonical pushes and opcodes.
//! The builder is purely syntactic: it guarantees the encoding of each
//! element, never the semantic validity of the whole program.

use crate::num::script_num_bytes;
use crate::opcodes::*;

/// Largest payload encoded as a direct push (length byte only).
const MAX_DIRECT_PUSH: usize = 75;

/// A stateful builder producing one VM program.
///
/// Mutators return `&mut Self` so emission sites can chain:
///
/// ```
/// use chain_vm::{opcodes, Builder};
///
/// let mut b = Builder::new();
/// b.add_int64(1).add_op(opcodes::OP_TXSIGHASH).add_op(opcodes::OP_EQUAL);
/// assert_eq!(b.program(), &[0x51, 0xae, 0x87]);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    program: Vec<u8>,
}

impl Builder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Builder {
            program: Vec::new(),
        }
    }

    /// Append a canonical data push of `data`.
    ///
    /// Empty data is pushed as `OP_0`; 1-75 bytes use the direct form;
    /// longer payloads use the smallest `OP_PUSHDATA` form that fits.
    /// Pushes are capped at `u32::MAX` bytes by the encoding itself;
    /// consensus bounds programs far below that, so the cap is enforced
    /// with a debug assertion only.
    pub fn add_data(&mut self, data: &[u8]) -> &mut Self {
        debug_assert!(data.len() <= u32::MAX as usize);
        if data.is_empty() {
            self.program.push(OP_0);
            return self;
        }
        if data.len() <= MAX_DIRECT_PUSH {
            self.program.push(data.len() as u8);
        } else if data.len() <= 0xff {
            self.program.push(OP_PUSHDATA1);
            self.program.push(data.len() as u8);
        } else if data.len() <= 0xffff {
            self.program.push(OP_PUSHDATA2);
            self.program
                .extend_from_slice(&(data.len() as u16).to_le_bytes());
        } else {
            self.program.push(OP_PUSHDATA4);
            self.program
                .extend_from_slice(&(data.len() as u32).to_le_bytes());
        }
        self.program.extend_from_slice(data);
        self
    }

    /// Append a push of the minimally encoded signed integer `n`.
    ///
    /// 0, -1, and 1-16 use their dedicated opcodes; everything else is a
    /// data push of the script-number encoding.
    pub fn add_int64(&mut self, n: i64) -> &mut Self {
        match n {
            0 => {
                self.program.push(OP_0);
                self
            }
            -1 => {
                self.program.push(OP_1NEGATE);
                self
            }
            1..=16 => {
                self.program.push(OP_1 + (n as u8 - 1));
                self
            }
            _ => self.add_data(&script_num_bytes(n)),
        }
    }

    /// Append a single opcode byte.
    pub fn add_op(&mut self, op: u8) -> &mut Self {
        self.program.push(op);
        self
    }

    /// The accumulated program bytes. The builder remains usable; further
    /// appends extend the same program.
    pub fn program(&self) -> &[u8] {
        &self.program
    }

    /// Consume the builder, returning the accumulated program.
    pub fn into_program(self) -> Vec<u8> {
        self.program
    }
}
