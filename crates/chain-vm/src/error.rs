/// Error types for VM program encoding and parsing.
#[derive(Debug, thiserror::Error)]
pub enum VmError {
    /// A push operation ran past the end of the program bytes.
    #[error("unexpected end of program")]
    UnexpectedEnd,

    /// A script number was not minimally encoded.
    #[error("number is not minimally encoded")]
    NonMinimalNumber,

    /// A script number encoding exceeds the 8-byte protocol limit.
    #[error("number encoded as {0} bytes exceeds the 8-byte limit")]
    NumberTooLong(usize),

    /// An opcode chunk appeared where an integer was required.
    #[error("opcode 0x{0:02x} is not an integer")]
    NotANumber(u8),

    /// Multisig quorum out of range for the declared key count.
    #[error("multisig quorum {quorum} out of range for {keys} keys")]
    BadQuorum { quorum: i64, keys: i64 },

    /// The program does not have the P2DP multisig layout.
    #[error("not a P2DP multisig program: {0}")]
    BadMultisigProgram(String),
}
