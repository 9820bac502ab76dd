//! Outpoint identifying a prior transaction output.

use chain_primitives::util::ByteWriter;

/// A `(txid, index)` pair identifying the output spent by an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outpoint {
    /// The 32-byte ID of the transaction holding the output.
    pub txid: [u8; 32],

    /// Index of the output within that transaction.
    pub index: u32,
}

impl Outpoint {
    /// Byte length of the canonical serialization.
    pub const SERIALIZED_LEN: usize = 36;

    /// Create an outpoint.
    pub fn new(txid: [u8; 32], index: u32) -> Self {
        Outpoint { txid, index }
    }

    /// The canonical serialization: txid followed by the index in LE.
    ///
    /// This is the byte string `OP_OUTPOINT` pushes and the outpoint
    /// constraint compares against, so it is consensus-critical.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(Self::SERIALIZED_LEN);
        writer.write_bytes(&self.txid);
        writer.write_u32_le(self.index);
        writer.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_layout() {
        let outpoint = Outpoint::new([0xab; 32], 0x01020304);
        let bytes = outpoint.to_bytes();
        assert_eq!(bytes.len(), Outpoint::SERIALIZED_LEN);
        assert_eq!(&bytes[..32], &[0xab; 32]);
        assert_eq!(&bytes[32..], &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_distinct_indexes_serialize_differently() {
        let a = Outpoint::new([0; 32], 0);
        let b = Outpoint::new([0; 32], 1);
        assert_ne!(a.to_bytes(), b.to_bytes());
    }
}
