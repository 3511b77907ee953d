//! Memory-address lane unit tests.

use crate::common::builder::*;
use crate::common::harness::TestContext;
use mips_core::core::pipeline::stages::mem_addr;

#[test]
fn test_computes_effective_address() {
    let mut ctx = TestContext::new().with_reg(2, 100);
    ctx.cpu_mut().queues.pre_mem_addr.push_back(lw(1, 2, 4));

    mem_addr::consume(ctx.cpu_mut());
    assert_eq!(ctx.cpu().mem_addr.slot, Some(lw(1, 2, 4)));
    assert!(ctx.cpu().queues.pre_mem_addr.is_empty());

    mem_addr::produce(ctx.cpu_mut());
    let request = ctx.cpu().queues.pre_mem.get(0).copied().unwrap();
    assert_eq!(request.instr, lw(1, 2, 4));
    assert_eq!(request.address, 104);
    assert!(ctx.cpu().mem_addr.slot.is_none());
}

#[test]
fn test_negative_displacement() {
    let mut ctx = TestContext::new().with_reg(2, 100);
    ctx.cpu_mut().queues.pre_mem_addr.push_back(sw(1, 2, -4));

    mem_addr::consume(ctx.cpu_mut());
    mem_addr::produce(ctx.cpu_mut());
    assert_eq!(ctx.cpu().queues.pre_mem.get(0).unwrap().address, 96);
}

#[test]
fn test_empty_lane_produces_nothing() {
    let mut ctx = TestContext::new();
    mem_addr::consume(ctx.cpu_mut());
    mem_addr::produce(ctx.cpu_mut());
    assert!(ctx.cpu().queues.pre_mem.is_empty());
}
