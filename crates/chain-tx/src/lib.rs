//! Chain transaction skeleton - inputs, outputs, and sighash computation.
//!
//! Provides the Transaction type with issuance and spend inputs, asset
//! outputs, and the committed signature hash used when a template is
//! finalized.

pub mod input;
pub mod outpoint;
pub mod output;
pub mod sighash;
pub mod transaction;

mod error;
pub use error::TxError;
pub use input::{InputCommitment, TxInput};
pub use outpoint::Outpoint;
pub use output::TxOutput;
pub use transaction::Transaction;
