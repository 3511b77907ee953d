//! Instruction encoding layout and memory map constants.

/// Byte address of the first program word.
pub const TEXT_BASE: u32 = 256;

/// Size of one instruction or data word in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of architectural registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of characters in one machine-code word.
pub const WORD_BITS: usize = 32;

/// Bit range of the opcode field within a machine-code word.
pub const OPCODE_RANGE: (usize, usize) = (0, 6);
/// Bit range of the `rs` field.
pub const RS_RANGE: (usize, usize) = (6, 11);
/// Bit range of the `rt` field.
pub const RT_RANGE: (usize, usize) = (11, 16);
/// Bit range of the `rd` field.
pub const RD_RANGE: (usize, usize) = (16, 21);
/// Bit range of the shift-amount field.
pub const SA_RANGE: (usize, usize) = (21, 26);
/// Bit range of the function-code field.
pub const FUNC_RANGE: (usize, usize) = (26, 32);
/// Bit range of the 16-bit immediate field.
pub const IMM_RANGE: (usize, usize) = (16, 32);
/// Bit range of the 26-bit jump index field.
pub const INDEX_RANGE: (usize, usize) = (6, 32);
