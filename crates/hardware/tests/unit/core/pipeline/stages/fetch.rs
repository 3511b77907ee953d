//! Fetch stage unit tests.
//!
//! Verifies that fetch:
//!   1. Fills two decode slots in order and advances the PC
//!   2. Respects free PreIssue space before examining a word
//!   3. Latches branches and BREAK into the staller, never into PreIssue
//!   4. Holds a stalled branch while a source register has a pending
//!      writer, in the scoreboard or among unissued PreIssue entries
//!   5. Retires a branch by redirecting the PC and parking it in the
//!      executed slot for exactly one cycle
//!   6. Drops fetched NOPs at Produce

use crate::common::builder::*;
use crate::common::harness::TestContext;
use mips_core::core::pipeline::stages::fetch;

#[test]
fn test_dual_fetch_in_order() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 5), addi(2, 0, 7), brk()]);
    fetch::consume(ctx.cpu_mut());

    assert_eq!(ctx.cpu().fetch.slots[0], Some(addi(1, 0, 5)));
    assert_eq!(ctx.cpu().fetch.slots[1], Some(addi(2, 0, 7)));
    assert_eq!(ctx.cpu().pc, 264);

    fetch::produce(ctx.cpu_mut());
    assert_eq!(ctx.cpu().queues.pre_issue.len(), 2);
    assert_eq!(ctx.cpu().fetch.slots, [None, None]);
}

#[test]
fn test_fetch_limited_by_preissue_space() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 1), addi(2, 0, 2), brk()]);
    for i in 0..3u8 {
        ctx.cpu_mut().queues.pre_issue.push_back(addi(10 + i, 0, 0));
    }

    fetch::consume(ctx.cpu_mut());
    // One free slot: only the first instruction is fetched.
    assert_eq!(ctx.cpu().fetch.slots[0], Some(addi(1, 0, 1)));
    assert_eq!(ctx.cpu().fetch.slots[1], None);
    assert_eq!(ctx.cpu().pc, 260);
}

#[test]
fn test_fetch_blocked_by_full_preissue() {
    let mut ctx = TestContext::new().load_program(&[brk()]);
    for i in 0..4u8 {
        ctx.cpu_mut().queues.pre_issue.push_back(addi(10 + i, 0, 0));
    }

    fetch::consume(ctx.cpu_mut());
    // No space: the word at PC is not even examined, so BREAK is not latched.
    assert!(!ctx.cpu().fetch.broken);
    assert!(ctx.cpu().fetch.staller.is_none());
    assert_eq!(ctx.cpu().pc, 256);
}

#[test]
fn test_branch_goes_to_staller() {
    let mut ctx = TestContext::new().load_program(&[beq(1, 0, 2), addi(2, 0, 1), brk()]);
    fetch::consume(ctx.cpu_mut());

    assert_eq!(ctx.cpu().fetch.staller, Some(beq(1, 0, 2)));
    assert_eq!(ctx.cpu().fetch.slots, [None, None]);
    assert_eq!(ctx.cpu().pc, 260);

    fetch::produce(ctx.cpu_mut());
    // A branch never enters PreIssue.
    assert!(ctx.cpu().queues.pre_issue.is_empty());
}

#[test]
fn test_branch_after_first_slot_stops_fetch() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 5), j(68), brk()]);
    fetch::consume(ctx.cpu_mut());

    assert_eq!(ctx.cpu().fetch.slots[0], Some(addi(1, 0, 5)));
    assert_eq!(ctx.cpu().fetch.slots[1], None);
    assert_eq!(ctx.cpu().fetch.staller, Some(j(68)));
    assert_eq!(ctx.cpu().pc, 264);
}

#[test]
fn test_staller_blocks_further_fetch() {
    let mut ctx = TestContext::new().load_program(&[beq(1, 0, 2), addi(2, 0, 1), brk()]);
    ctx.cpu_mut().regs.set_pending_write(1, true);

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());
    assert!(ctx.cpu().fetch.staller.is_some());

    // Next cycle: fetch must not read past the unresolved branch.
    fetch::consume(ctx.cpu_mut());
    assert_eq!(ctx.cpu().fetch.slots, [None, None]);
    assert_eq!(ctx.cpu().pc, 260);
}

#[test]
fn test_staller_waits_on_scoreboard_raw() {
    let mut ctx = TestContext::new().load_program(&[beq(1, 0, 2), brk()]);
    ctx.cpu_mut().regs.set_pending_write(1, true);

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());

    assert_eq!(ctx.cpu().fetch.staller, Some(beq(1, 0, 2)));
    assert!(ctx.cpu().fetch.executed.is_none());
    assert_eq!(ctx.cpu().pc, 260);
}

#[test]
fn test_staller_waits_on_unissued_writer() {
    // The staller must not retire while an earlier, not-yet-issued
    // instruction in PreIssue still writes one of its sources.
    let mut ctx = TestContext::new().load_program(&[beq(1, 0, 2), brk()]);
    ctx.cpu_mut().queues.pre_issue.push_back(addi(1, 0, 5));

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());

    assert_eq!(ctx.cpu().fetch.staller, Some(beq(1, 0, 2)));
    assert!(ctx.cpu().fetch.executed.is_none());
}

#[test]
fn test_taken_branch_redirects_pc() {
    let mut ctx = TestContext::new().load_program(&[beq(1, 0, 2), brk()]);

    fetch::consume(ctx.cpu_mut());
    assert_eq!(ctx.cpu().pc, 260);
    fetch::produce(ctx.cpu_mut());

    // Target is computed from the post-fetch PC: 260 + 2*4.
    assert_eq!(ctx.cpu().pc, 268);
    assert_eq!(ctx.cpu().fetch.executed, Some(beq(1, 0, 2)));
    assert!(ctx.cpu().fetch.staller.is_none());
}

#[test]
fn test_untaken_branch_retires_without_redirect() {
    let mut ctx = TestContext::new()
        .load_program(&[bgtz(1, 2), brk()])
        .with_reg(1, -3);

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());

    assert_eq!(ctx.cpu().pc, 260);
    assert_eq!(ctx.cpu().fetch.executed, Some(bgtz(1, 2)));
}

#[test]
fn test_executed_slot_clears_after_one_cycle() {
    let mut ctx = TestContext::new().load_program(&[j(68), brk()]);

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());
    assert_eq!(ctx.cpu().fetch.executed, Some(j(68)));

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());
    assert!(ctx.cpu().fetch.executed.is_none());
}

#[test]
fn test_break_latches_and_retires() {
    let mut ctx = TestContext::new().load_program(&[brk()]);

    fetch::consume(ctx.cpu_mut());
    assert!(ctx.cpu().fetch.broken);
    assert_eq!(ctx.cpu().fetch.staller, Some(brk()));
    assert_eq!(ctx.cpu().pc, 260);

    fetch::produce(ctx.cpu_mut());
    // BREAK has no sources, so it retires the same cycle.
    assert_eq!(ctx.cpu().fetch.executed, Some(brk()));
    assert!(ctx.cpu().fetch.staller.is_none());
    // Retiring BREAK does not touch the PC.
    assert_eq!(ctx.cpu().pc, 260);
}

#[test]
fn test_broken_stops_fetching() {
    let mut ctx = TestContext::new().load_program(&[brk(), addi(1, 0, 1)]);

    fetch::consume(ctx.cpu_mut());
    fetch::produce(ctx.cpu_mut());
    fetch::consume(ctx.cpu_mut());

    assert_eq!(ctx.cpu().fetch.slots, [None, None]);
    assert_eq!(ctx.cpu().pc, 260);
}

#[test]
fn test_nop_occupies_slot_but_is_dropped() {
    let mut ctx = TestContext::new().load_program(&[nop(), addi(1, 0, 5), brk()]);

    fetch::consume(ctx.cpu_mut());
    assert_eq!(ctx.cpu().fetch.slots[0], Some(nop()));
    assert_eq!(ctx.cpu().fetch.slots[1], Some(addi(1, 0, 5)));

    fetch::produce(ctx.cpu_mut());
    // Only the ADDI reaches PreIssue.
    assert_eq!(ctx.cpu().queues.pre_issue.len(), 1);
    assert_eq!(ctx.cpu().queues.pre_issue.get(0), Some(&addi(1, 0, 5)));
}
