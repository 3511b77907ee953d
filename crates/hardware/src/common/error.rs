//! Decode and load error definitions.
//!
//! This module defines the user-facing failure modes of the simulator:
//! 1. **Decode errors:** A machine-code word that cannot be turned into an
//!    instruction (wrong length, non-binary character, unknown opcode bits).
//! 2. **Load errors:** An unreadable program file, or a decode error tagged
//!    with the line it occurred on.
//!
//! Conditions inside the pipeline are never errors; hazards are handled by
//! the issue and fetch logic.

use std::fmt;
use std::io;

/// Failure to decode a single machine-code word.
#[derive(Debug)]
pub enum DecodeError {
    /// The word is not exactly 32 characters long.
    BadWordLength(usize),
    /// The word contains a character other than '0' or '1'.
    BadBinaryDigit(char),
    /// The top six bits do not name a known opcode.
    ///
    /// The associated value is the offending 6-bit pattern.
    UnknownOpcode(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::BadWordLength(len) => {
                write!(f, "machine-code word has {} characters, expected 32", len)
            }
            DecodeError::BadBinaryDigit(ch) => {
                write!(f, "machine-code word contains non-binary character '{}'", ch)
            }
            DecodeError::UnknownOpcode(bits) => {
                write!(f, "unknown opcode bits {:06b}", bits)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Failure to load a program file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(io::Error),
    /// A word in the file failed to decode.
    ///
    /// `line` is 1-based.
    Decode { line: usize, cause: DecodeError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "cannot read program file: {}", e),
            LoadError::Decode { line, cause } => write!(f, "line {}: {}", line, cause),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Decode { cause, .. } => Some(cause),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}
