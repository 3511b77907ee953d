//! Instruction pretty printer.
//!
//! Produces the canonical textual form used by both the disassembly listing
//! and the per-cycle trace. Immediate conventions: branches print the
//! byte offset (`imm * 4`), J prints `index << 2`, shifts print the raw
//! shift amount, and loads/stores print the immediate beside the base
//! register.

use crate::isa::instruction::{Format, Instruction, Opcode};

/// Formats an instruction in its canonical textual form.
pub fn format_instruction(instr: &Instruction) -> String {
    match (instr.opcode, instr.format) {
        (Opcode::J, Format::J { index }) => format!("J #{}", index << 2),
        (Opcode::Jr, Format::R { rs, .. }) => format!("JR R{}", rs),
        (Opcode::Beq, Format::I { rs, rt, imm }) => {
            format!("BEQ R{}, R{}, #{}", rs, rt, i32::from(imm) * 4)
        }
        (Opcode::Bltz, Format::I { rs, imm, .. }) => {
            format!("BLTZ R{}, #{}", rs, i32::from(imm) * 4)
        }
        (Opcode::Bgtz, Format::I { rs, imm, .. }) => {
            format!("BGTZ R{}, #{}", rs, i32::from(imm) * 4)
        }
        (Opcode::Sw, Format::I { rs, rt, imm }) => format!("SW R{}, {}(R{})", rt, imm, rs),
        (Opcode::Lw, Format::I { rs, rt, imm }) => format!("LW R{}, {}(R{})", rt, imm, rs),
        (Opcode::Sll, Format::R { rt, rd, sa, .. }) => format!("SLL R{}, R{}, #{}", rd, rt, sa),
        (Opcode::Srl, Format::R { rt, rd, sa, .. }) => format!("SRL R{}, R{}, #{}", rd, rt, sa),
        (Opcode::Sra, Format::R { rt, rd, sa, .. }) => format!("SRA R{}, R{}, #{}", rd, rt, sa),
        (Opcode::Nop, _) => "NOP".to_string(),
        (Opcode::Break, _) => "BREAK".to_string(),
        (op, Format::R { rs, rt, rd, .. }) => {
            format!("{} R{}, R{}, R{}", mnemonic(op), rd, rs, rt)
        }
        (op, Format::I { rs, rt, imm }) => {
            format!("{} R{}, R{}, #{}", mnemonic(op), rt, rs, imm)
        }
        // Category-2 opcodes never carry a J shape.
        (op, Format::J { .. }) => mnemonic(op).to_string(),
    }
}

/// Upper-case mnemonic for the category-2 opcodes.
fn mnemonic(op: Opcode) -> &'static str {
    match op {
        Opcode::Add => "ADD",
        Opcode::Sub => "SUB",
        Opcode::Mul => "MUL",
        Opcode::And => "AND",
        Opcode::Or => "OR",
        Opcode::Xor => "XOR",
        Opcode::Nor => "NOR",
        Opcode::Slt => "SLT",
        Opcode::Addi => "ADDI",
        Opcode::Andi => "ANDI",
        Opcode::Ori => "ORI",
        Opcode::Xori => "XORI",
        Opcode::J => "J",
        Opcode::Jr => "JR",
        Opcode::Beq => "BEQ",
        Opcode::Bltz => "BLTZ",
        Opcode::Bgtz => "BGTZ",
        Opcode::Break => "BREAK",
        Opcode::Sw => "SW",
        Opcode::Lw => "LW",
        Opcode::Sll => "SLL",
        Opcode::Srl => "SRL",
        Opcode::Sra => "SRA",
        Opcode::Nop => "NOP",
    }
}
