//! Memory stage unit tests.
//!
//! Stores retire here (write memory, release locks, skip writeback);
//! loads read their word and continue to PostMem.

use crate::common::builder::*;
use crate::common::harness::TestContext;
use mips_core::core::pipeline::latches::MemRequest;
use mips_core::core::pipeline::scoreboard;
use mips_core::core::pipeline::stages::mem;

#[test]
fn test_store_writes_memory_and_retires() {
    let mut ctx = TestContext::new().with_reg(2, 42);
    let store = sw(2, 1, 0);
    scoreboard::add_locks(&mut ctx.cpu_mut().regs, &store.reg_use());
    ctx.cpu_mut().queues.pre_mem.push_back(MemRequest {
        instr: store,
        address: 400,
    });

    mem::consume(ctx.cpu_mut());
    mem::produce(ctx.cpu_mut());

    assert_eq!(ctx.cpu().memory.read(400), 42);
    // The store never reaches writeback.
    assert!(ctx.cpu().queues.post_mem.is_empty());
    // Its read locks are released here; no register stays locked.
    assert!(ctx.cpu().regs.all_clear());
    assert_eq!(ctx.cpu().stats.inst_store, 1);
}

#[test]
fn test_load_reads_memory() {
    let mut ctx = TestContext::new().with_mem(400, 7);
    ctx.cpu_mut().queues.pre_mem.push_back(MemRequest {
        instr: lw(3, 1, 0),
        address: 400,
    });

    mem::consume(ctx.cpu_mut());
    mem::produce(ctx.cpu_mut());

    let result = ctx.cpu().queues.post_mem.get(0).copied().unwrap();
    assert_eq!(result.instr, lw(3, 1, 0));
    assert_eq!(result.value, 7);
}

#[test]
fn test_load_of_unmapped_address_reads_zero() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().queues.pre_mem.push_back(MemRequest {
        instr: lw(3, 1, 0),
        address: 4096,
    });

    mem::consume(ctx.cpu_mut());
    mem::produce(ctx.cpu_mut());

    assert_eq!(ctx.cpu().queues.post_mem.get(0).unwrap().value, 0);
    // The read does not create a memory entry.
    assert!(ctx.cpu().memory.is_empty());
}

#[test]
fn test_store_value_read_at_produce() {
    let mut ctx = TestContext::new().with_reg(2, 1);
    ctx.cpu_mut().queues.pre_mem.push_back(MemRequest {
        instr: sw(2, 1, 0),
        address: 400,
    });

    mem::consume(ctx.cpu_mut());
    ctx.cpu_mut().regs.write(2, 99);
    mem::produce(ctx.cpu_mut());
    assert_eq!(ctx.cpu().memory.read(400), 99);
}
