//! Instruction fetch stage.
//!
//! Fetches up to two instructions per cycle, in order, into decode slots
//! that Produce pushes onto the PreIssue queue. Branches and BREAK never
//! enter PreIssue: they are latched into the staller slot, where they wait
//! until no in-flight or not-yet-issued earlier instruction still writes
//! one of their source registers, and then resolve. A retired staller is
//! held in the executed slot for one cycle so the trace can show it.

use crate::core::cpu::Cpu;
use crate::core::pipeline::scoreboard::{self, Hazard};
use crate::core::units::bru;
use crate::isa::instruction::{Instruction, Opcode};

/// Fetch unit state.
#[derive(Debug, Clone, Default)]
pub struct FetchUnit {
    /// In-order decode slots filled during Consume.
    pub slots: [Option<Instruction>; 2],
    /// A branch or BREAK awaiting retirement. While occupied, fetch stalls.
    pub staller: Option<Instruction>,
    /// The staller retired this cycle, kept for one cycle of trace output.
    pub executed: Option<Instruction>,
    /// Set when a BREAK has been fetched; fetch is finished for good.
    pub broken: bool,
}

impl FetchUnit {
    /// True when neither decode slots nor the staller hold an instruction.
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(Option::is_none) && self.staller.is_none()
    }
}

/// Fetch Consume: fill up to two decode slots from instruction memory.
///
/// Each slot requires a free PreIssue entry before the word at PC is even
/// examined. A BREAK sets `broken` and goes to the staller; a branch goes
/// to the staller; either one ends the cycle's fetching. The PC advances
/// past every accepted instruction.
pub fn consume(cpu: &mut Cpu) {
    if cpu.fetch.staller.is_some() || cpu.fetch.broken {
        if cpu.fetch.staller.is_some() {
            cpu.stats.fetch_stall_cycles += 1;
        }
        return;
    }

    let num_empty = cpu.queues.pre_issue.num_empty();

    for slot in 0..2 {
        if num_empty <= slot {
            return;
        }

        let instr = cpu.instr_at(cpu.pc);

        if instr.opcode == Opcode::Break {
            cpu.fetch.broken = true;
            cpu.fetch.staller = Some(instr);
            cpu.advance_pc();
            return;
        }
        if instr.is_branch() {
            cpu.fetch.staller = Some(instr);
            cpu.advance_pc();
            return;
        }

        cpu.fetch.slots[slot] = Some(instr);
        cpu.advance_pc();
    }
}

/// Fetch Produce: publish the decode slots, then try to retire the staller.
///
/// Order matters and is architectural: the slots go to PreIssue first and
/// the executed slot is cleared before the staller test, so the staller's
/// PreIssue scan sees the instructions fetched this very cycle. A staller
/// retires only when no source register has a pending writer (scoreboard
/// RAW) and no earlier not-yet-issued PreIssue entry writes one of its
/// sources.
pub fn produce(cpu: &mut Cpu) {
    for slot in 0..2 {
        if let Some(instr) = cpu.fetch.slots[slot].take() {
            // Fetched NOPs are dropped here; they never enter PreIssue.
            if !instr.is_nop() {
                cpu.queues.pre_issue.push_back(instr);
            }
        }
    }

    cpu.fetch.executed = None;

    if let Some(staller) = cpu.fetch.staller {
        let uses = staller.reg_use();

        let active_raw = scoreboard::active_hazard(&cpu.regs, &uses, &[Hazard::Raw]);
        let pre_issue_raw = cpu
            .queues
            .pre_issue
            .iter()
            .any(|prior| scoreboard::inter_hazard(&prior.reg_use(), &uses, &[Hazard::Raw]));

        if !active_raw && !pre_issue_raw {
            if let Some(target) = bru::resolve(&staller, &cpu.regs, cpu.pc) {
                cpu.pc = target;
            }
            if cpu.trace {
                eprintln!("IF  cycle={} retired [{}] pc={:#x}", cpu.cycle, staller, cpu.pc);
            }
            if staller.is_branch() {
                cpu.stats.inst_branch += 1;
                cpu.stats.instructions_retired += 1;
            }
            cpu.fetch.executed = cpu.fetch.staller.take();
        }
    }
}
