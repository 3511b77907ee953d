//! Branch target resolution.
//!
//! Resolves a branch in the fetch unit's staller slot against the current
//! register file and PC. The PC passed in is the value as it stands at
//! retirement, which is the branch's own address plus 4 (fetch advances
//! past the branch when latching it and then stops).

use crate::common::reg::RegisterFile;
use crate::isa::instruction::{Format, Instruction, Opcode};

/// Returns the target PC of a taken branch, or `None` when the branch is
/// not taken (or the instruction is not a branch).
pub fn resolve(instr: &Instruction, regs: &RegisterFile, pc: u32) -> Option<u32> {
    match (instr.opcode, instr.format) {
        (Opcode::J, Format::J { index }) => {
            Some((pc & 0xF000_0000) | ((index as u32) << 2))
        }
        (Opcode::Jr, Format::R { rs, .. }) => Some(regs.read(rs) as u32),
        (Opcode::Beq, Format::I { rs, rt, imm }) => {
            (regs.read(rs) == regs.read(rt)).then(|| relative(pc, imm))
        }
        (Opcode::Bltz, Format::I { rs, imm, .. }) => {
            (regs.read(rs) < 0).then(|| relative(pc, imm))
        }
        (Opcode::Bgtz, Format::I { rs, imm, .. }) => {
            (regs.read(rs) > 0).then(|| relative(pc, imm))
        }
        _ => None,
    }
}

/// PC-relative target: the immediate is a word count.
fn relative(pc: u32, imm: i16) -> u32 {
    pc.wrapping_add((i32::from(imm) * 4) as u32)
}
