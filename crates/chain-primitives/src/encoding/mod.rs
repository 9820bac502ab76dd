//! Hex-encoded byte strings for JSON transport.
//!
//! Witness components travel between co-signing parties as JSON; every
//! byte field is rendered as lowercase hex without a `0x` prefix, and an
//! empty field is the empty string.

use std::fmt;
use std::ops::Deref;

/// A byte vector that serializes as a lowercase hex string.
///
/// Behaves as `Vec<u8>` for all byte-level operations (it derefs to
/// `[u8]`); the wrapper exists only to pin down the JSON representation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(Vec<u8>);

impl HexBytes {
    /// Create an empty `HexBytes`.
    pub fn new() -> Self {
        HexBytes(Vec::new())
    }

    /// Decode a `HexBytes` from a hex string.
    ///
    /// # Arguments
    /// * `hex_str` - Lowercase or uppercase hex, without a `0x` prefix.
    ///
    /// # Returns
    /// The decoded bytes, or a `hex::FromHexError` if the string is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, hex::FromHexError> {
        Ok(HexBytes(hex::decode(hex_str)?))
    }

    /// Encode the bytes as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        HexBytes(bytes)
    }
}

impl Deref for HexBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexBytes({})", self.to_hex())
    }
}

impl fmt::Display for HexBytes {
    /// Display the bytes as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl serde::Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HexBytes::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let bytes = HexBytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(bytes.to_hex(), "deadbeef");
        assert_eq!(HexBytes::from_hex("deadbeef").unwrap(), bytes);
    }

    #[test]
    fn test_empty_serializes_as_empty_string() {
        let json = serde_json::to_string(&HexBytes::new()).unwrap();
        assert_eq!(json, r#""""#);
        let back: HexBytes = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let bytes = HexBytes::from(vec![0x01, 0x02, 0xff]);
        let json = serde_json::to_string(&bytes).unwrap();
        assert_eq!(json, r#""0102ff""#);
        let back: HexBytes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bytes);
    }

    #[test]
    fn test_deserialize_rejects_invalid_hex() {
        let result: Result<HexBytes, _> = serde_json::from_str(r#""zzzz""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deref_gives_byte_slice() {
        let bytes = HexBytes::from(vec![1, 2, 3]);
        assert_eq!(bytes.len(), 3);
        assert_eq!(&bytes[..2], &[1, 2]);
    }
}
