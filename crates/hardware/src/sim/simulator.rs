//! Simulator: owns the CPU and drives the cycle loop.
//!
//! Each iteration writes the cycle delimiter and header, advances the clock
//! one tick, and writes the post-Produce snapshot. The loop ends once a
//! BREAK has been fetched and every queue and lane latch has drained, with
//! that final cycle's snapshot on disk.

use std::io::{self, Write};

use crate::config::Config;
use crate::core::cpu::Cpu;
use crate::sim::loader::LoadedProgram;
use crate::sim::trace;

/// Top-level simulator.
pub struct Simulator {
    /// The simulated CPU.
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator at reset with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }

    /// Installs a parsed program: instructions into instruction memory,
    /// data words into data memory.
    pub fn load(&mut self, program: &LoadedProgram) {
        for &(addr, instr) in &program.instructions {
            self.cpu.program.insert(addr, instr);
        }
        for &(addr, value) in &program.data {
            self.cpu.memory.write(addr, value);
        }
    }

    /// Advances the simulation by one clock cycle.
    pub fn step(&mut self) {
        self.cpu.clock();
    }

    /// Runs to completion, writing the per-cycle trace to `out`.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        loop {
            out.write_all(b"--------------------\n")?;
            write!(out, "Cycle {}:\n\n", self.cpu.cycle)?;

            self.cpu.clock();
            trace::write_snapshot(out, &self.cpu)?;

            if self.cpu.is_broken() && self.cpu.is_drained() {
                break;
            }
        }
        out.flush()
    }
}
