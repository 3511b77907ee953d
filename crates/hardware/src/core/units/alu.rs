//! Arithmetic/logical result computation.
//!
//! Signed 32-bit semantics with wrapping on overflow. SRL shifts in zeros,
//! SRA sign-extends. ADDI sign-extends its immediate; ANDI/ORI/XORI
//! zero-extend theirs.

use crate::common::reg::RegisterFile;
use crate::isa::instruction::{Format, Instruction, Opcode};

/// Computes the result of an arithmetic/logical instruction.
///
/// Only instructions routed into the ALU lane reach this function; control
/// flow and memory opcodes yield 0.
pub fn execute(instr: &Instruction, regs: &RegisterFile) -> i32 {
    match (instr.opcode, instr.format) {
        (Opcode::Sll, Format::R { rt, sa, .. }) => {
            ((regs.read(rt) as u32) << u32::from(sa)) as i32
        }
        (Opcode::Srl, Format::R { rt, sa, .. }) => {
            ((regs.read(rt) as u32) >> u32::from(sa)) as i32
        }
        (Opcode::Sra, Format::R { rt, sa, .. }) => regs.read(rt) >> u32::from(sa),
        (Opcode::Add, Format::R { rs, rt, .. }) => regs.read(rs).wrapping_add(regs.read(rt)),
        (Opcode::Sub, Format::R { rs, rt, .. }) => regs.read(rs).wrapping_sub(regs.read(rt)),
        (Opcode::Mul, Format::R { rs, rt, .. }) => regs.read(rs).wrapping_mul(regs.read(rt)),
        (Opcode::And, Format::R { rs, rt, .. }) => regs.read(rs) & regs.read(rt),
        (Opcode::Or, Format::R { rs, rt, .. }) => regs.read(rs) | regs.read(rt),
        (Opcode::Xor, Format::R { rs, rt, .. }) => regs.read(rs) ^ regs.read(rt),
        (Opcode::Nor, Format::R { rs, rt, .. }) => !(regs.read(rs) | regs.read(rt)),
        (Opcode::Slt, Format::R { rs, rt, .. }) => i32::from(regs.read(rs) < regs.read(rt)),
        (Opcode::Addi, Format::I { rs, imm, .. }) => regs.read(rs).wrapping_add(i32::from(imm)),
        (Opcode::Andi, Format::I { rs, imm, .. }) => regs.read(rs) & zero_extend(imm),
        (Opcode::Ori, Format::I { rs, imm, .. }) => regs.read(rs) | zero_extend(imm),
        (Opcode::Xori, Format::I { rs, imm, .. }) => regs.read(rs) ^ zero_extend(imm),
        _ => 0,
    }
}

/// Zero-extends a 16-bit immediate to 32 bits.
fn zero_extend(imm: i16) -> i32 {
    i32::from(imm as u16)
}
