//! Per-cycle trace formatter.
//!
//! Writes the post-Produce snapshot of one cycle: the fetch unit's waiting
//! and executed slots, all six queues, the register file, and data memory.
//! The format is byte-exact, including the quirks of the reference output
//! (single-slot queues print on one line; a data value is followed by a tab
//! unless it is the eighth of its row, which is followed by a newline).

use std::io::{self, Write};

use crate::core::cpu::Cpu;
use crate::isa::instruction::Instruction;

/// Writes the snapshot of the current cycle.
pub fn write_snapshot<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    out.write_all(b"IF Unit:\n")?;
    write_slot(out, "\tWaiting Instruction:", cpu.fetch.staller.as_ref())?;
    write_slot(out, "\tExecuted Instruction:", cpu.fetch.executed.as_ref())?;

    out.write_all(b"Pre-Issue Queue:\n")?;
    write_entries(out, 4, |i| cpu.queues.pre_issue.get(i))?;

    out.write_all(b"Pre-ALU1 Queue:\n")?;
    write_entries(out, 2, |i| cpu.queues.pre_mem_addr.get(i))?;

    write_slot(
        out,
        "Pre-MEM Queue:",
        cpu.queues.pre_mem.get(0).map(|e| &e.instr),
    )?;
    write_slot(
        out,
        "Post-MEM Queue:",
        cpu.queues.post_mem.get(0).map(|e| &e.instr),
    )?;

    out.write_all(b"Pre-ALU2 Queue:\n")?;
    write_entries(out, 2, |i| cpu.queues.pre_alu.get(i))?;

    write_slot(
        out,
        "Post-ALU2 Queue:",
        cpu.queues.post_alu.get(0).map(|e| &e.instr),
    )?;

    write_registers(out, cpu)?;
    write_data(out, cpu)
}

/// One-line slot: the label, then ` [<instr>]` only when occupied.
fn write_slot<W: Write>(out: &mut W, label: &str, slot: Option<&Instruction>) -> io::Result<()> {
    match slot {
        Some(instr) => writeln!(out, "{} [{}]", label, instr),
        None => writeln!(out, "{}", label),
    }
}

/// Multi-slot queue body: one `Entry <i>:` line per slot, occupied or not.
fn write_entries<'a, W, F>(out: &mut W, capacity: usize, slot: F) -> io::Result<()>
where
    W: Write,
    F: Fn(usize) -> Option<&'a Instruction>,
{
    for i in 0..capacity {
        write_slot(out, &format!("\tEntry {}:", i), slot(i))?;
    }
    Ok(())
}

/// The register file, four rows of eight tab-separated values.
fn write_registers<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    out.write_all(b"\nRegisters\n")?;
    for row in 0..4u8 {
        let base = row * 8;
        write!(out, "R{:02}:", base)?;
        for offset in 0..8u8 {
            write!(out, "\t{}", cpu.regs.read(base + offset))?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Data memory in insertion order, rows of eight.
///
/// Each value is followed by a tab except the eighth of its row, which is
/// followed by a newline; a partial final row therefore ends with a tab.
fn write_data<W: Write>(out: &mut W, cpu: &Cpu) -> io::Result<()> {
    out.write_all(b"\nData\n")?;
    let mut column = 0;
    for (addr, value) in cpu.memory.iter() {
        if column == 0 {
            write!(out, "{}:\t", addr)?;
        }
        write!(out, "{}", value)?;
        if column == 7 {
            out.write_all(b"\n")?;
            column = 0;
        } else {
            out.write_all(b"\t")?;
            column += 1;
        }
    }
    Ok(())
}
