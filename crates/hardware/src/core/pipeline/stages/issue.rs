//! Issue stage.
//!
//! Scans the PreIssue queue in FIFO order and selects up to two
//! instructions per cycle, one per lane at most. A candidate is skipped
//! when its lane's input queue is full, when the scoreboard shows a live
//! RAW or WAW against in-flight instructions, when any earlier unissued
//! instruction conflicts with it (RAW, WAW, or WAR), or when it is a
//! memory operation behind an unissued store. Selection removes the
//! instruction from PreIssue and takes its register locks immediately,
//! during Consume, so the fetch unit's staller check later in the same
//! cycle already sees them.

use crate::core::cpu::Cpu;
use crate::core::pipeline::scoreboard::{self, Hazard};
use crate::isa::instruction::Instruction;

/// Issue stage selection slots, latched in Consume.
#[derive(Debug, Clone, Default)]
pub struct IssueUnit {
    /// Earliest eligible candidate.
    pub slot1: Option<Instruction>,
    /// Second candidate; always the other lane kind than `slot1`.
    pub slot2: Option<Instruction>,
}

impl IssueUnit {
    /// True when no instruction is latched.
    pub fn is_idle(&self) -> bool {
        self.slot1.is_none() && self.slot2.is_none()
    }
}

/// Issue Consume: select up to two issuable instructions from PreIssue.
pub fn consume(cpu: &mut Cpu) {
    let mut sel1: Option<(usize, Instruction)> = None;
    let mut sel2: Option<usize> = None;

    for pos in 0..cpu.queues.pre_issue.len() {
        let Some(&candidate) = cpu.queues.pre_issue.get(pos) else {
            break;
        };
        let uses = candidate.reg_use();

        // Structural hazard against the lane input queue.
        if candidate.is_mem_access() && cpu.queues.pre_mem_addr.is_full() {
            continue;
        }
        if !candidate.is_mem_access() && cpu.queues.pre_alu.is_full() {
            continue;
        }

        // RAW or WAW against anything issued but not yet retired.
        if scoreboard::active_hazard(&cpu.regs, &uses, &[Hazard::Raw, Hazard::Waw]) {
            continue;
        }

        // Ordering against every earlier not-yet-issued instruction: no
        // hazard of any kind may be jumped over, and memory operations
        // never pass an unissued store.
        let blocked = cpu.queues.pre_issue.iter().take(pos).any(|prior| {
            scoreboard::inter_hazard(
                &prior.reg_use(),
                &uses,
                &[Hazard::Raw, Hazard::Waw, Hazard::War],
            ) || (candidate.is_mem_access() && prior.is_store())
        });
        if blocked {
            continue;
        }

        match sel1 {
            None => sel1 = Some((pos, candidate)),
            Some((_, first)) => {
                // Both selections must use different lanes.
                if first.is_mem_access() == candidate.is_mem_access() {
                    continue;
                }
                sel2 = Some(pos);
                break;
            }
        }
    }

    // Pull the later position first so the earlier one stays valid.
    if let Some(pos) = sel2 {
        if let Some(instr) = cpu.queues.pre_issue.pull(pos) {
            scoreboard::add_locks(&mut cpu.regs, &instr.reg_use());
            cpu.issue.slot2 = Some(instr);
        }
    }
    if let Some((pos, _)) = sel1 {
        if let Some(instr) = cpu.queues.pre_issue.pull(pos) {
            scoreboard::add_locks(&mut cpu.regs, &instr.reg_use());
            cpu.issue.slot1 = Some(instr);
        }
    }

    if cpu.issue.slot1.is_some() && cpu.issue.slot2.is_some() {
        cpu.stats.dual_issue_cycles += 1;
    }
}

/// Issue Produce: route the latched selections into their lanes.
pub fn produce(cpu: &mut Cpu) {
    for slot in [cpu.issue.slot1.take(), cpu.issue.slot2.take()] {
        let Some(instr) = slot else { continue };
        if cpu.trace {
            eprintln!("IS  cycle={} issued [{}]", cpu.cycle, instr);
        }
        if instr.is_mem_access() {
            cpu.queues.pre_mem_addr.push_back(instr);
        } else {
            cpu.queues.pre_alu.push_back(instr);
        }
    }
}
