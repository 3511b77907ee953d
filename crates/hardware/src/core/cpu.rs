//! CPU state and the two-phase clock routine.
//!
//! The `Cpu` owns everything the stages touch: instruction memory, data
//! memory, the register file (with its scoreboard flags), the PC, the six
//! inter-stage queues, and the per-stage latches. Stages are free functions
//! that borrow the `Cpu` for the duration of one Consume or Produce call.

use std::collections::BTreeMap;

use crate::common::constants::WORD_SIZE;
use crate::common::mem::DataMemory;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::pipeline::latches::PipelineQueues;
use crate::core::pipeline::stages;
use crate::core::pipeline::stages::fetch::FetchUnit;
use crate::core::pipeline::stages::issue::IssueUnit;
use crate::core::pipeline::stages::alu::AluLane;
use crate::core::pipeline::stages::mem::MemUnit;
use crate::core::pipeline::stages::mem_addr::MemAddrLane;
use crate::core::pipeline::stages::writeback::WritebackUnit;
use crate::isa::instruction::Instruction;
use crate::stats::SimStats;

/// The simulated CPU.
pub struct Cpu {
    /// Instruction memory: word-aligned byte address to instruction.
    pub program: BTreeMap<u32, Instruction>,
    /// Data memory.
    pub memory: DataMemory,
    /// Architectural registers with scoreboard flags.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u32,
    /// Cycle counter; starts at 1 and increments at the end of each tick.
    pub cycle: u64,
    /// The six inter-stage queues.
    pub queues: PipelineQueues,

    /// Fetch unit state (decode slots, staller, executed slot, broken flag).
    pub fetch: FetchUnit,
    /// Issue stage selection slots.
    pub issue: IssueUnit,
    /// ALU lane latch.
    pub alu: AluLane,
    /// Memory-address lane latch.
    pub mem_addr: MemAddrLane,
    /// Memory stage latch.
    pub mem: MemUnit,
    /// Writeback stage latches.
    pub writeback: WritebackUnit,

    /// Run statistics.
    pub stats: SimStats,
    /// Emit per-cycle pipeline decisions to stderr.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU at reset: empty queues, zeroed registers, PC at the
    /// configured start address.
    pub fn new(config: &Config) -> Self {
        Self {
            program: BTreeMap::new(),
            memory: DataMemory::new(),
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            cycle: 1,
            queues: PipelineQueues::new(),
            fetch: FetchUnit::default(),
            issue: IssueUnit::default(),
            alu: AluLane::default(),
            mem_addr: MemAddrLane::default(),
            mem: MemUnit::default(),
            writeback: WritebackUnit::default(),
            stats: SimStats::new(),
            trace: config.general.trace_pipeline,
        }
    }

    /// The instruction at `addr`; unmapped addresses read as NOP.
    pub fn instr_at(&self, addr: u32) -> Instruction {
        self.program.get(&addr).copied().unwrap_or_else(Instruction::nop)
    }

    /// Advances the PC by one word.
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(WORD_SIZE);
    }

    /// Advances every stage by one clock tick.
    ///
    /// Strict two-phase order: every stage Consumes (latching its inputs
    /// from the upstream queues), then every stage Produces (publishing
    /// into the downstream queues and the register file). A value produced
    /// this cycle is therefore never observable by a Consume of the same
    /// cycle, which is what models the edge-triggered registers between
    /// stages.
    pub fn clock(&mut self) {
        stages::fetch::consume(self);
        stages::issue::consume(self);
        stages::alu::consume(self);
        stages::mem_addr::consume(self);
        stages::mem::consume(self);
        stages::writeback::consume(self);

        stages::fetch::produce(self);
        stages::issue::produce(self);
        stages::alu::produce(self);
        stages::mem_addr::produce(self);
        stages::mem::produce(self);
        stages::writeback::produce(self);

        self.cycle += 1;
        self.stats.cycles += 1;
    }

    /// True once the fetch unit has retired a BREAK.
    pub fn is_broken(&self) -> bool {
        self.fetch.broken
    }

    /// True when the pipeline holds no in-flight work.
    pub fn is_drained(&self) -> bool {
        self.queues.all_empty()
            && self.fetch.is_idle()
            && self.issue.is_idle()
            && self.alu.slot.is_none()
            && self.mem_addr.slot.is_none()
            && self.mem.slot.is_none()
            && self.writeback.is_idle()
    }
}
