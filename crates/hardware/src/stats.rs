//! Simulation statistics collection and reporting.
//!
//! This module tracks summary metrics for a simulation run. It provides:
//! 1. **Cycle counts:** Total cycles and cycles where fetch sat stalled.
//! 2. **Instruction mix:** Retired counts by category (ALU, load, store,
//!    branch).
//! 3. **Issue behavior:** Cycles in which both issue slots were filled.

use std::time::Instant;

/// Summary statistics for one simulation run.
#[derive(Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total clock cycles elapsed.
    pub cycles: u64,
    /// Total instructions retired (writeback, store retirement, and branch
    /// resolution all count).
    pub instructions_retired: u64,

    /// ALU instructions retired.
    pub inst_alu: u64,
    /// Loads retired.
    pub inst_load: u64,
    /// Stores retired.
    pub inst_store: u64,
    /// Branches and jumps retired.
    pub inst_branch: u64,

    /// Cycles in which the issue stage filled both slots.
    pub dual_issue_cycles: u64,
    /// Cycles in which fetch was blocked by an unresolved staller.
    pub fetch_stall_cycles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            dual_issue_cycles: 0,
            fetch_stall_cycles: 0,
        }
    }
}

impl SimStats {
    /// Creates a zeroed statistics block with the wall clock started now.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cycles per retired instruction.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        println!();
        println!("=== Simulation Statistics ===");
        println!("Cycles:              {}", self.cycles);
        println!("Instructions:        {}", self.instructions_retired);
        println!("CPI:                 {:.3}", self.cpi());
        println!(
            "Mix:                 alu={} load={} store={} branch={}",
            self.inst_alu, self.inst_load, self.inst_store, self.inst_branch
        );
        println!("Dual-issue cycles:   {}", self.dual_issue_cycles);
        println!("Fetch stall cycles:  {}", self.fetch_stall_cycles);
        println!("Host time:           {:.3}s", elapsed.as_secs_f64());
    }
}
