//! Program loader and disassembly listing.
//!
//! A program file carries one 32-character binary word per line, loaded at
//! consecutive word addresses starting at 256. Words up to and including
//! the first BREAK are instructions; every word after it is a 32-bit
//! two's-complement data value, loaded into data memory at the addresses
//! immediately following the BREAK. Parsing also produces the disassembly
//! listing, one `<word>\t<address>\t<text>` line per input word.

use std::fs;
use std::path::Path;

use crate::common::constants::{TEXT_BASE, WORD_SIZE};
use crate::common::error::LoadError;
use crate::isa::decode;
use crate::isa::instruction::{Instruction, Opcode};

/// A parsed program: instruction map, initial data image, and listing.
#[derive(Debug, Clone, Default)]
pub struct LoadedProgram {
    /// Instructions keyed by word-aligned byte address.
    pub instructions: Vec<(u32, Instruction)>,
    /// Initial data words keyed by word-aligned byte address.
    pub data: Vec<(u32, i32)>,
    /// The disassembly listing for the whole file.
    pub listing: String,
}

/// Parses program text into instructions, data, and the listing.
///
/// Decode failures are reported with the 1-based line number of the
/// offending word.
pub fn parse_program(source: &str) -> Result<LoadedProgram, LoadError> {
    let mut program = LoadedProgram::default();
    let mut addr = TEXT_BASE;
    let mut in_data = false;

    for (idx, word) in source.split_whitespace().enumerate() {
        let tag = |cause| LoadError::Decode {
            line: idx + 1,
            cause,
        };

        if in_data {
            let value = decode::decode_data(word).map_err(tag)?;
            program.data.push((addr, value));
            program
                .listing
                .push_str(&format!("{}\t{}\t{}\n", word, addr, value));
        } else {
            let instr = decode::decode(word).map_err(tag)?;
            program.instructions.push((addr, instr));
            program
                .listing
                .push_str(&format!("{}\t{}\t{}\n", word, addr, instr));
            if instr.opcode == Opcode::Break {
                in_data = true;
            }
        }

        addr += WORD_SIZE;
    }

    Ok(program)
}

/// Reads and parses a program file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<LoadedProgram, LoadError> {
    let source = fs::read_to_string(path)?;
    parse_program(&source)
}
