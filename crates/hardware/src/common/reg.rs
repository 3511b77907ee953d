//! Architectural register file.
//!
//! Thirty-two 32-bit signed registers, each carrying the two scoreboard
//! flags that mediate between the pipeline stages:
//! - `pending_read`: some issued, not-yet-retired instruction reads this
//!   register (used to detect WAR against a later writer).
//! - `pending_write`: some issued, not-yet-retired instruction writes it.
//!
//! Register 0 is an ordinary register here; no zero-wire masking is applied
//! (the program under test is responsible for its conventional meaning).

use crate::common::constants::NUM_REGISTERS;

/// One architectural register with its scoreboard flags.
#[derive(Debug, Clone, Copy, Default)]
struct Register {
    value: i32,
    pending_read: bool,
    pending_write: bool,
}

/// The architectural register file.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [Register; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all values zero and all flags clear.
    pub fn new() -> Self {
        Self {
            regs: [Register::default(); NUM_REGISTERS],
        }
    }

    /// Reads the value of register `idx`.
    pub fn read(&self, idx: u8) -> i32 {
        self.regs[idx as usize].value
    }

    /// Writes `value` into register `idx`.
    pub fn write(&mut self, idx: u8, value: i32) {
        self.regs[idx as usize].value = value;
    }

    /// True when register `idx` has a pending reader.
    pub fn pending_read(&self, idx: u8) -> bool {
        self.regs[idx as usize].pending_read
    }

    /// True when register `idx` has a pending writer.
    pub fn pending_write(&self, idx: u8) -> bool {
        self.regs[idx as usize].pending_write
    }

    /// Sets or clears the pending-read flag of register `idx`.
    pub fn set_pending_read(&mut self, idx: u8, flag: bool) {
        self.regs[idx as usize].pending_read = flag;
    }

    /// Sets or clears the pending-write flag of register `idx`.
    pub fn set_pending_write(&mut self, idx: u8, flag: bool) {
        self.regs[idx as usize].pending_write = flag;
    }

    /// True when no register has a pending read or pending write.
    ///
    /// Holds at reset and again at quiescence (all queues drained).
    pub fn all_clear(&self) -> bool {
        self.regs
            .iter()
            .all(|r| !r.pending_read && !r.pending_write)
    }
}
