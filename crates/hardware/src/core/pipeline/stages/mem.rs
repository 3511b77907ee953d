//! Memory stage.
//!
//! Stores retire here: the word is written and the instruction's locks are
//! released, it never reaches writeback. Loads read their word and pass it
//! on through PostMem.

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::{MemRequest, MemResult};
use crate::core::pipeline::scoreboard;
use crate::isa::instruction::Format;

/// Memory stage latch.
#[derive(Debug, Clone, Default)]
pub struct MemUnit {
    /// The memory request being serviced this cycle.
    pub slot: Option<MemRequest>,
}

/// Mem Consume: latch the front of PreMem.
pub fn consume(cpu: &mut Cpu) {
    if !cpu.queues.pre_mem.is_empty() {
        cpu.mem.slot = cpu.queues.pre_mem.pop_front();
    }
}

/// Mem Produce: service the request.
///
/// A store writes `regs[rt]` to its address and is destroyed, releasing
/// its read locks (stores have no destination, so only pending-read flags
/// are involved). A load reads the word (0 for unmapped addresses) and
/// publishes it to PostMem.
pub fn produce(cpu: &mut Cpu) {
    let Some(request) = cpu.mem.slot.take() else {
        return;
    };

    if request.instr.is_store() {
        if let Format::I { rt, .. } = request.instr.format {
            cpu.memory.write(request.address, cpu.regs.read(rt));
        }
        scoreboard::remove_locks(&mut cpu.regs, &request.instr.reg_use());
        cpu.stats.inst_store += 1;
        cpu.stats.instructions_retired += 1;
    } else {
        let value = cpu.memory.read(request.address);
        cpu.queues.post_mem.push_back(MemResult {
            instr: request.instr,
            value,
        });
    }
}
