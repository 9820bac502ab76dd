//! Chain VM - opcode definitions, program construction, and program parsing.
//!
//! The consensus VM executes small stack programs embedded in transaction
//! witnesses. This crate owns the byte-exact encoding side of that VM:
//! the opcode table, a builder emitting canonical data and integer pushes,
//! a chunk decoder, and the P2DP-MultiSig control-program layout.

pub mod builder;
pub mod chunk;
pub mod multisig;
pub mod num;
pub mod opcodes;

mod error;
pub use builder::Builder;
pub use chunk::Chunk;
pub use error::VmError;
