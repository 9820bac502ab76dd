#![deny(missing_docs)]

//! Chain node core - complete witness-construction stack.
//!
//! Re-exports all core components for convenient single-crate usage.

pub use chain_primitives as primitives;
pub use chain_tx as tx;
pub use chain_txbuilder as txbuilder;
pub use chain_vm as vm;
