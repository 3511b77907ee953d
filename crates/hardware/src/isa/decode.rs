//! Binary machine-code word decoding.
//!
//! Program files carry one 32-character '0'/'1' word per line. The top six
//! bits select the opcode; the remaining 26 bits are cut by the classical
//! R/I/J field layout. Constant fields the ISA fixes by encoding (the JR
//! hint bits, the shift `rs` field, the arithmetic function codes) are
//! normalized during decode rather than read back from the word.

use crate::common::constants::{
    IMM_RANGE, INDEX_RANGE, OPCODE_RANGE, RD_RANGE, RS_RANGE, RT_RANGE, SA_RANGE, WORD_BITS,
};
use crate::common::error::DecodeError;
use crate::isa::instruction::{Format, Instruction, Opcode};

/// Decodes one machine-code word into an instruction.
pub fn decode(word: &str) -> Result<Instruction, DecodeError> {
    validate(word)?;

    let opcode_bits = field(word, OPCODE_RANGE) as u8;
    let opcode = match opcode_bits {
        // Category 1
        0b010000 => Opcode::J,
        0b010001 => Opcode::Jr,
        0b010010 => Opcode::Beq,
        0b010011 => Opcode::Bltz,
        0b010100 => Opcode::Bgtz,
        0b010101 => Opcode::Break,
        0b010110 => Opcode::Sw,
        0b010111 => Opcode::Lw,
        0b011000 => Opcode::Sll,
        0b011001 => Opcode::Srl,
        0b011010 => Opcode::Sra,
        0b011011 => Opcode::Nop,
        // Category 2
        0b110000 => Opcode::Add,
        0b110001 => Opcode::Sub,
        0b110010 => Opcode::Mul,
        0b110011 => Opcode::And,
        0b110100 => Opcode::Or,
        0b110101 => Opcode::Xor,
        0b110110 => Opcode::Nor,
        0b110111 => Opcode::Slt,
        0b111000 => Opcode::Addi,
        0b111001 => Opcode::Andi,
        0b111010 => Opcode::Ori,
        0b111011 => Opcode::Xori,
        bits => return Err(DecodeError::UnknownOpcode(bits)),
    };

    let format = match opcode {
        Opcode::J | Opcode::Nop | Opcode::Break => Format::J {
            index: signed_field(word, INDEX_RANGE),
        },
        // The hint bits (sa position) are ignored; function code is 8.
        Opcode::Jr => Format::R {
            rs: field(word, RS_RANGE) as u8,
            rt: 0,
            rd: 0,
            sa: 0,
            func: 8,
        },
        Opcode::Beq | Opcode::Sw | Opcode::Lw => Format::I {
            rs: field(word, RS_RANGE) as u8,
            rt: field(word, RT_RANGE) as u8,
            imm: signed_field(word, IMM_RANGE) as i16,
        },
        Opcode::Bltz | Opcode::Bgtz => Format::I {
            rs: field(word, RS_RANGE) as u8,
            rt: 0,
            imm: signed_field(word, IMM_RANGE) as i16,
        },
        Opcode::Sll | Opcode::Srl | Opcode::Sra => Format::R {
            rs: 0,
            rt: field(word, RT_RANGE) as u8,
            rd: field(word, RD_RANGE) as u8,
            sa: field(word, SA_RANGE) as u8,
            func: match opcode {
                Opcode::Srl => 2,
                Opcode::Sra => 3,
                _ => 0,
            },
        },
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Nor
        | Opcode::Slt => Format::R {
            rs: field(word, RS_RANGE) as u8,
            rt: field(word, RT_RANGE) as u8,
            rd: field(word, RD_RANGE) as u8,
            sa: 0,
            func: 0,
        },
        Opcode::Addi | Opcode::Andi | Opcode::Ori | Opcode::Xori => Format::I {
            rs: field(word, RS_RANGE) as u8,
            rt: field(word, RT_RANGE) as u8,
            imm: signed_field(word, IMM_RANGE) as i16,
        },
    };

    Ok(Instruction::new(opcode, format))
}

/// Decodes a 32-bit two's-complement data word (the lines after BREAK).
pub fn decode_data(word: &str) -> Result<i32, DecodeError> {
    validate(word)?;
    Ok(signed_field(word, (0, WORD_BITS)))
}

/// Checks length and character set of a machine-code word.
fn validate(word: &str) -> Result<(), DecodeError> {
    if word.len() != WORD_BITS {
        return Err(DecodeError::BadWordLength(word.len()));
    }
    if let Some(ch) = word.chars().find(|&c| c != '0' && c != '1') {
        return Err(DecodeError::BadBinaryDigit(ch));
    }
    Ok(())
}

/// Reads the unsigned value of the bit range `[start, end)`.
///
/// The word is validated before any field is cut, so the parse cannot fail.
fn field(word: &str, (start, end): (usize, usize)) -> u32 {
    word[start..end]
        .bytes()
        .fold(0, |acc, b| (acc << 1) | u32::from(b - b'0'))
}

/// Reads the bit range `[start, end)` as a two's-complement value.
fn signed_field(word: &str, range: (usize, usize)) -> i32 {
    let width = range.1 - range.0;
    let raw = field(word, range);
    let shift = 32 - width;
    ((raw << shift) as i32) >> shift
}
