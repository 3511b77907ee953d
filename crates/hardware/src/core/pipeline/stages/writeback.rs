//! Writeback stage.
//!
//! Drains PostALU and PostMem, one entry each per cycle, writing results
//! into the register file and releasing the instructions' locks. Both may
//! retire in the same cycle; the locks cleared here make dependents
//! eligible for issue (and stalled branches eligible for retirement) from
//! the next cycle's Consume onward.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{AluResult, MemResult};
use crate::core::pipeline::scoreboard;

/// Writeback stage latches.
#[derive(Debug, Clone, Default)]
pub struct WritebackUnit {
    /// Result arriving from the ALU lane.
    pub slot_alu: Option<AluResult>,
    /// Result arriving from the memory lane.
    pub slot_mem: Option<MemResult>,
}

impl WritebackUnit {
    /// True when no result is latched.
    pub fn is_idle(&self) -> bool {
        self.slot_alu.is_none() && self.slot_mem.is_none()
    }
}

/// Writeback Consume: latch the fronts of PostALU and PostMem.
pub fn consume(cpu: &mut Cpu) {
    if !cpu.queues.post_alu.is_empty() {
        cpu.writeback.slot_alu = cpu.queues.post_alu.pop_front();
    }
    if !cpu.queues.post_mem.is_empty() {
        cpu.writeback.slot_mem = cpu.queues.post_mem.pop_front();
    }
}

/// Writeback Produce: commit results and release locks.
pub fn produce(cpu: &mut Cpu) {
    if let Some(entry) = cpu.writeback.slot_alu.take() {
        let uses = entry.instr.reg_use();
        if let Some(rd) = uses.write() {
            cpu.regs.write(rd, entry.value);
        }
        scoreboard::remove_locks(&mut cpu.regs, &uses);
        cpu.stats.inst_alu += 1;
        cpu.stats.instructions_retired += 1;
    }

    if let Some(entry) = cpu.writeback.slot_mem.take() {
        let uses = entry.instr.reg_use();
        if let Some(rt) = uses.write() {
            cpu.regs.write(rt, entry.value);
        }
        scoreboard::remove_locks(&mut cpu.regs, &uses);
        cpu.stats.inst_load += 1;
        cpu.stats.instructions_retired += 1;
    }
}
