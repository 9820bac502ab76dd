//! Script number encoding.
//!
//! Numbers on the VM stack are little-endian byte arrays with a sign bit
//! in the most significant bit of the last byte. The encoding must be
//! minimal: no trailing zero byte unless it carries the sign bit.

use crate::VmError;

/// Maximum byte length of an encoded script number.
pub const MAX_NUM_LEN: usize = 8;

/// Encode an i64 as a minimal script number.
///
/// Zero encodes as the empty byte string. `i64::MIN` is outside the
/// protocol's numeric range (its magnitude needs a ninth byte) and is
/// never produced by the node; it is rejected in debug builds.
///
/// # Arguments
/// * `n` - The value to encode.
///
/// # Returns
/// The minimal little-endian sign-magnitude encoding.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    debug_assert!(n != i64::MIN);
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = (n as i128).unsigned_abs();

    let mut result = Vec::new();
    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // If the high bit of the top byte is set, the sign needs its own byte.
    let last = result.len() - 1;
    if result[last] & 0x80 != 0 {
        result.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        result[last] |= 0x80;
    }

    result
}

/// Decode a minimal script number into an i64.
///
/// The empty byte string decodes to zero.
///
/// # Arguments
/// * `bytes` - The encoded number.
///
/// # Returns
/// The decoded value, or an error if the encoding is longer than
/// [`MAX_NUM_LEN`] bytes or is not minimal.
pub fn script_num_from_bytes(bytes: &[u8]) -> Result<i64, VmError> {
    if bytes.len() > MAX_NUM_LEN {
        return Err(VmError::NumberTooLong(bytes.len()));
    }
    if bytes.is_empty() {
        return Ok(0);
    }

    // Minimality: the top byte may only be 0x00/0x80 if the byte below it
    // needs the full 8 bits.
    let last = bytes[bytes.len() - 1];
    if last & 0x7f == 0 && (bytes.len() == 1 || bytes[bytes.len() - 2] & 0x80 == 0) {
        return Err(VmError::NonMinimalNumber);
    }

    let mut magnitude: u64 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        magnitude |= (b as u64) << (8 * i);
    }

    let negative = last & 0x80 != 0;
    if negative {
        // Clear the sign bit from the magnitude.
        magnitude &= !(0x80u64 << (8 * (bytes.len() - 1)));
        Ok(-(magnitude as i64))
    } else {
        Ok(magnitude as i64)
    }
}
