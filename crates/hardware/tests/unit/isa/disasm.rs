//! Disassembly formatting tests.
//!
//! The textual forms are contractual: branches print byte offsets
//! (`imm * 4`), J prints `index << 2`, shifts print the raw shift amount,
//! loads and stores print the immediate beside the base register.

use crate::common::builder::*;

#[test]
fn test_addi() {
    assert_eq!(addi(1, 0, -50).to_string(), "ADDI R1, R0, #-50");
}

#[test]
fn test_three_operand() {
    assert_eq!(add(3, 1, 2).to_string(), "ADD R3, R1, R2");
    assert_eq!(nor(6, 4, 5).to_string(), "NOR R6, R4, R5");
    assert_eq!(slt(1, 2, 3).to_string(), "SLT R1, R2, R3");
}

#[test]
fn test_immediate_logical_prints_signed() {
    // The immediate is stored sign-extended even though the logical ops
    // zero-extend it at execution time.
    assert_eq!(ori(1, 0, -1).to_string(), "ORI R1, R0, #-1");
    assert_eq!(andi(2, 1, 255).to_string(), "ANDI R2, R1, #255");
}

#[test]
fn test_memory_ops() {
    assert_eq!(sw(2, 1, 8).to_string(), "SW R2, 8(R1)");
    assert_eq!(lw(3, 1, -4).to_string(), "LW R3, -4(R1)");
}

#[test]
fn test_branches_print_byte_offsets() {
    assert_eq!(beq(1, 2, 4).to_string(), "BEQ R1, R2, #16");
    assert_eq!(bltz(1, -2).to_string(), "BLTZ R1, #-8");
    assert_eq!(bgtz(5, 3).to_string(), "BGTZ R5, #12");
}

#[test]
fn test_jumps() {
    assert_eq!(j(120).to_string(), "J #480");
    assert_eq!(jr(3).to_string(), "JR R3");
}

#[test]
fn test_shifts_print_raw_amount() {
    assert_eq!(sll(4, 3, 2).to_string(), "SLL R4, R3, #2");
    assert_eq!(srl(2, 1, 1).to_string(), "SRL R2, R1, #1");
    assert_eq!(sra(3, 1, 1).to_string(), "SRA R3, R1, #1");
}

#[test]
fn test_nop_break() {
    assert_eq!(nop().to_string(), "NOP");
    assert_eq!(brk().to_string(), "BREAK");
}
