//! Register locks and hazard predicates.
//!
//! The scoreboard is the pair of pending-read/pending-write flags each
//! register carries. Locks are added when the issue stage selects an
//! instruction (and checked by the fetch unit before retiring a branch) and
//! removed when the instruction leaves the pipeline. Two predicate families
//! exist: `active_hazard` tests an unissued instruction against the live
//! flags, `inter_hazard` tests two not-yet-issued instructions against each
//! other.

use crate::common::reg::RegisterFile;
use crate::isa::instruction::RegUse;

/// Classical data hazard kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    /// Read after write.
    Raw,
    /// Write after write.
    Waw,
    /// Write after read.
    War,
}

/// Sets the pending flags for every register `uses` touches.
///
/// Called in Issue.Consume the moment an instruction is selected, so that
/// Fetch.Produce of the same cycle already observes the locks.
pub fn add_locks(regs: &mut RegisterFile, uses: &RegUse) {
    set_locks(regs, uses, true);
}

/// Clears the pending flags for every register `uses` touches.
///
/// Called when the instruction leaves the pipeline: Writeback.Produce for
/// loads and ALU operations, Mem.Produce for stores.
pub fn remove_locks(regs: &mut RegisterFile, uses: &RegUse) {
    set_locks(regs, uses, false);
}

fn set_locks(regs: &mut RegisterFile, uses: &RegUse, flag: bool) {
    for r in uses.reads() {
        regs.set_pending_read(r, flag);
    }
    if let Some(w) = uses.write() {
        regs.set_pending_write(w, flag);
    }
}

/// True when any of `kinds` is live between `uses` and the in-flight
/// instructions recorded in the scoreboard flags.
///
/// RAW: a source register has a pending writer. WAW: the destination has a
/// pending writer. WAR: the destination has a pending reader.
pub fn active_hazard(regs: &RegisterFile, uses: &RegUse, kinds: &[Hazard]) -> bool {
    if kinds.contains(&Hazard::Raw) && uses.reads().any(|r| regs.pending_write(r)) {
        return true;
    }

    let Some(write) = uses.write() else {
        // No destination: WAW and WAR cannot apply.
        return false;
    };

    if kinds.contains(&Hazard::Waw) && regs.pending_write(write) {
        return true;
    }
    if kinds.contains(&Hazard::War) && regs.pending_read(write) {
        return true;
    }

    false
}

/// True when any of `kinds` is live between two not-yet-issued
/// instructions, `earlier` preceding `later` in program order.
///
/// RAW: `later` reads the register `earlier` writes. WAR: `later` writes a
/// register `earlier` reads. WAW: both write the same register.
pub fn inter_hazard(earlier: &RegUse, later: &RegUse, kinds: &[Hazard]) -> bool {
    if kinds.contains(&Hazard::Raw) {
        if let Some(w) = earlier.write() {
            if later.reads_reg(w) {
                return true;
            }
        }
    }

    let Some(later_write) = later.write() else {
        return false;
    };

    if kinds.contains(&Hazard::War) && earlier.reads_reg(later_write) {
        return true;
    }
    if kinds.contains(&Hazard::Waw) && earlier.write() == Some(later_write) {
        return true;
    }

    false
}
