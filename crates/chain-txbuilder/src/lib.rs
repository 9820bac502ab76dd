//! Chain transaction template builder.
//!
//! A template pairs a transaction skeleton with signing instructions:
//! per-input lists of witness components that know how to gather
//! signatures and produce the final input-witness stacks. Signing is
//! delegated to a caller-supplied callback so the core never holds key
//! material; multiple co-signing parties exchange templates as JSON and
//! each contributes the signatures its keys allow.

pub mod signer;
pub mod template;
pub mod witness;

mod constraint;
mod error;

pub use error::TxBuilderError;
pub use signer::{SignerError, SignerFn};
pub use template::{SigningInstruction, Template};
pub use witness::{DataWitness, KeyId, SignatureWitness, WitnessComponent};
