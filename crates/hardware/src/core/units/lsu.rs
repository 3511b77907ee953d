//! Effective-address computation for loads and stores.

use crate::common::reg::RegisterFile;
use crate::isa::instruction::{Format, Instruction};

/// Computes `regs[rs] + sign-extended imm` as an unsigned byte address.
///
/// Reads the register file at the moment the memory-address stage produces,
/// so an earlier writeback in the same program is already visible.
pub fn effective_address(instr: &Instruction, regs: &RegisterFile) -> u32 {
    match instr.format {
        Format::I { rs, imm, .. } => regs.read(rs).wrapping_add(i32::from(imm)) as u32,
        // Loads and stores always carry the I shape.
        _ => 0,
    }
}
