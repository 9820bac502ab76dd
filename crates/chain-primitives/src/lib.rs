//! Chain node primitives - hashing, signature verification, and encoding.
//!
//! This crate provides the foundational building blocks for the Chain core:
//! - SHA3-256 hashing (the protocol digest)
//! - Ed25519 signature verification
//! - Hex-encoded byte strings for JSON transport
//! - Binary serialization helpers

pub mod ed25519;
pub mod encoding;
pub mod hash;
pub mod util;

pub use encoding::HexBytes;
