//! Instruction model.
//!
//! An instruction is an opcode plus a decoded operand shape. The register
//! dependency descriptor ([`RegUse`]) is a pure function of the two and is
//! what the scoreboard and issue logic operate on; the stages themselves
//! never re-derive operand roles.

use std::fmt;

/// Operation codes of the simulated ISA.
///
/// Category 1 carries control flow, memory, and shifts; category 2 carries
/// the three-operand and immediate arithmetic/logical operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Category 1
    J,
    Jr,
    Beq,
    Bltz,
    Bgtz,
    Break,
    Sw,
    Lw,
    Sll,
    Srl,
    Sra,
    Nop,
    // Category 2
    Add,
    Sub,
    Mul,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Addi,
    Andi,
    Ori,
    Xori,
}

/// Decoded operand fields, by classical MIPS instruction shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Register shape: rs, rt, rd, shift amount, function code.
    R { rs: u8, rt: u8, rd: u8, sa: u8, func: u8 },
    /// Immediate shape: rs, rt, sign-extended 16-bit immediate.
    I { rs: u8, rt: u8, imm: i16 },
    /// Jump shape: 26-bit index.
    J { index: i32 },
}

/// Register-dependency descriptor: up to two source reads and at most one
/// destination write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegUse {
    reads: [Option<u8>; 2],
    write: Option<u8>,
}

impl RegUse {
    fn new(reads: [Option<u8>; 2], write: Option<u8>) -> Self {
        Self { reads, write }
    }

    /// Iterates over the source register indices.
    pub fn reads(&self) -> impl Iterator<Item = u8> + '_ {
        self.reads.iter().flatten().copied()
    }

    /// The destination register index, if the instruction writes one.
    pub fn write(&self) -> Option<u8> {
        self.write
    }

    /// True when `reg` is one of the source registers.
    pub fn reads_reg(&self, reg: u8) -> bool {
        self.reads().any(|r| r == reg)
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub format: Format,
}

impl Instruction {
    /// Creates an instruction from its opcode and operand shape.
    pub fn new(opcode: Opcode, format: Format) -> Self {
        Self { opcode, format }
    }

    /// The canonical no-operation instruction.
    ///
    /// Also what an unmapped instruction-memory fetch yields.
    pub fn nop() -> Self {
        Self::new(Opcode::Nop, Format::J { index: 0 })
    }

    /// True for the instructions resolved in the fetch unit's staller slot.
    pub fn is_branch(&self) -> bool {
        matches!(
            self.opcode,
            Opcode::J | Opcode::Jr | Opcode::Beq | Opcode::Bltz | Opcode::Bgtz
        )
    }

    /// True for loads and stores, which issue into the memory-address lane.
    pub fn is_mem_access(&self) -> bool {
        matches!(self.opcode, Opcode::Lw | Opcode::Sw)
    }

    /// True for loads.
    pub fn is_load(&self) -> bool {
        self.opcode == Opcode::Lw
    }

    /// True for stores.
    pub fn is_store(&self) -> bool {
        self.opcode == Opcode::Sw
    }

    /// True for no-operations.
    pub fn is_nop(&self) -> bool {
        self.opcode == Opcode::Nop
    }

    /// Derives the register-dependency descriptor.
    ///
    /// Shift instructions read `rt` (their `rs` field is zero by encoding);
    /// stores read both the base and the value register and write nothing;
    /// loads write `rt`; immediate arithmetic reads `rs` and writes `rt`;
    /// three-operand arithmetic reads `rs`/`rt` and writes `rd`.
    pub fn reg_use(&self) -> RegUse {
        match (self.opcode, self.format) {
            (Opcode::Jr, Format::R { rs, .. }) => RegUse::new([Some(rs), None], None),
            (Opcode::Beq, Format::I { rs, rt, .. }) => RegUse::new([Some(rs), Some(rt)], None),
            (Opcode::Bltz | Opcode::Bgtz, Format::I { rs, .. }) => {
                RegUse::new([Some(rs), None], None)
            }
            (Opcode::Sw, Format::I { rs, rt, .. }) => RegUse::new([Some(rs), Some(rt)], None),
            (Opcode::Lw, Format::I { rs, rt, .. }) => RegUse::new([Some(rs), None], Some(rt)),
            (Opcode::Sll | Opcode::Srl | Opcode::Sra, Format::R { rt, rd, .. }) => {
                RegUse::new([Some(rt), None], Some(rd))
            }
            (
                Opcode::Add
                | Opcode::Sub
                | Opcode::Mul
                | Opcode::And
                | Opcode::Or
                | Opcode::Xor
                | Opcode::Nor
                | Opcode::Slt,
                Format::R { rs, rt, rd, .. },
            ) => RegUse::new([Some(rs), Some(rt)], Some(rd)),
            (
                Opcode::Addi | Opcode::Andi | Opcode::Ori | Opcode::Xori,
                Format::I { rs, rt, .. },
            ) => RegUse::new([Some(rs), None], Some(rt)),
            // J, NOP, BREAK, and any shape mismatch: no register traffic.
            _ => RegUse::default(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::isa::disasm::format_instruction(self))
    }
}
