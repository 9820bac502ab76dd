//! Program chunk parsing.
//!
//! A chunk is either an opcode or a data push with its payload. Parsers
//! that need to inspect a program structurally (multisig layout checks,
//! debugging) decode it into chunks first.

use crate::num::script_num_from_bytes;
use crate::opcodes::*;
use crate::VmError;

/// A single parsed element of a VM program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// The opcode byte. For direct pushes (1-75 bytes) this is the length.
    pub op: u8,
    /// The pushed payload, if this chunk is a data push.
    pub data: Option<Vec<u8>>,
}

impl Chunk {
    /// Interpret this chunk as a pushed integer.
    ///
    /// Accepts the small-integer opcodes (`OP_0`, `OP_1NEGATE`,
    /// `OP_1`..`OP_16`) and minimally encoded data pushes.
    ///
    /// # Returns
    /// The integer value, or an error if the chunk is a non-numeric
    /// opcode or a non-minimal encoding.
    pub fn as_int64(&self) -> Result<i64, VmError> {
        match self.op {
            OP_0 => Ok(0),
            OP_1NEGATE => Ok(-1),
            op if (OP_1..=OP_16).contains(&op) => Ok((op - OP_1) as i64 + 1),
            _ => match &self.data {
                Some(data) => script_num_from_bytes(data),
                None => Err(VmError::NotANumber(self.op)),
            },
        }
    }
}

/// Decode raw program bytes into a vector of chunks.
///
/// Handles direct pushes (0x01-0x4b) and the `OP_PUSHDATA1/2/4` forms;
/// every other byte is a standalone opcode.
///
/// # Arguments
/// * `bytes` - The raw program bytes.
///
/// # Returns
/// The parsed chunks, or `VmError::UnexpectedEnd` if a push runs past
/// the end of the program.
pub fn decode_chunks(bytes: &[u8]) -> Result<Vec<Chunk>, VmError> {
    let mut chunks = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let op = bytes[pos];

        match op {
            OP_PUSHDATA1 => {
                if bytes.len() < pos + 2 {
                    return Err(VmError::UnexpectedEnd);
                }
                let length = bytes[pos + 1] as usize;
                pos += 2;
                if bytes.len() < pos + length {
                    return Err(VmError::UnexpectedEnd);
                }
                chunks.push(Chunk {
                    op,
                    data: Some(bytes[pos..pos + length].to_vec()),
                });
                pos += length;
            }
            OP_PUSHDATA2 => {
                if bytes.len() < pos + 3 {
                    return Err(VmError::UnexpectedEnd);
                }
                let length = u16::from_le_bytes([bytes[pos + 1], bytes[pos + 2]]) as usize;
                pos += 3;
                if bytes.len() < pos + length {
                    return Err(VmError::UnexpectedEnd);
                }
                chunks.push(Chunk {
                    op,
                    data: Some(bytes[pos..pos + length].to_vec()),
                });
                pos += length;
            }
            OP_PUSHDATA4 => {
                if bytes.len() < pos + 5 {
                    return Err(VmError::UnexpectedEnd);
                }
                let length = u32::from_le_bytes([
                    bytes[pos + 1],
                    bytes[pos + 2],
                    bytes[pos + 3],
                    bytes[pos + 4],
                ]) as usize;
                pos += 5;
                if bytes.len() < pos + length {
                    return Err(VmError::UnexpectedEnd);
                }
                chunks.push(Chunk {
                    op,
                    data: Some(bytes[pos..pos + length].to_vec()),
                });
                pos += length;
            }
            OP_DATA_1..=OP_DATA_75 => {
                // Direct push: the opcode byte is the payload length.
                let length = op as usize;
                if bytes.len() < pos + 1 + length {
                    return Err(VmError::UnexpectedEnd);
                }
                chunks.push(Chunk {
                    op,
                    data: Some(bytes[pos + 1..pos + 1 + length].to_vec()),
                });
                pos += 1 + length;
            }
            _ => {
                chunks.push(Chunk { op, data: None });
                pos += 1;
            }
        }
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert!(decode_chunks(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_mixed_program() {
        // push(2 bytes) OP_EQUAL OP_VERIFY
        let program = [0x02, 0xaa, 0xbb, OP_EQUAL, OP_VERIFY];
        let chunks = decode_chunks(&program).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].data.as_deref(), Some(&[0xaa, 0xbb][..]));
        assert_eq!(chunks[1].op, OP_EQUAL);
        assert_eq!(chunks[2].op, OP_VERIFY);
    }

    #[test]
    fn test_decode_pushdata1() {
        let data = vec![0xcc; 80];
        let mut program = vec![OP_PUSHDATA1, 80];
        program.extend_from_slice(&data);
        let chunks = decode_chunks(&program).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].op, OP_PUSHDATA1);
        assert_eq!(chunks[0].data.as_deref(), Some(&data[..]));
    }

    #[test]
    fn test_decode_truncated_direct_push() {
        // 0x05 claims 5 bytes but only 3 follow.
        assert!(matches!(
            decode_chunks(&[0x05, 0x00, 0x00, 0x00]),
            Err(VmError::UnexpectedEnd)
        ));
    }

    #[test]
    fn test_decode_truncated_pushdata_forms() {
        assert!(decode_chunks(&[OP_PUSHDATA1]).is_err());
        assert!(decode_chunks(&[OP_PUSHDATA1, 5, 0, 0]).is_err());
        assert!(decode_chunks(&[OP_PUSHDATA2, 1]).is_err());
        assert!(decode_chunks(&[OP_PUSHDATA4, 1, 0, 0]).is_err());
    }

    #[test]
    fn test_as_int64_small_ops() {
        assert_eq!(Chunk { op: OP_0, data: None }.as_int64().unwrap(), 0);
        assert_eq!(Chunk { op: OP_1NEGATE, data: None }.as_int64().unwrap(), -1);
        assert_eq!(Chunk { op: OP_1, data: None }.as_int64().unwrap(), 1);
        assert_eq!(Chunk { op: OP_16, data: None }.as_int64().unwrap(), 16);
    }

    #[test]
    fn test_as_int64_data_push() {
        let chunk = Chunk {
            op: 0x02,
            data: Some(vec![0xe8, 0x03]),
        };
        assert_eq!(chunk.as_int64().unwrap(), 1000);
    }

    #[test]
    fn test_as_int64_rejects_plain_opcode() {
        assert!(matches!(
            Chunk { op: OP_VERIFY, data: None }.as_int64(),
            Err(VmError::NotANumber(_))
        ));
    }
}
