//! Cycle-accurate MIPS-like pipeline simulator library.
//!
//! This crate implements a simplified, in-order, dual-issue, scoreboarded
//! pipeline for a 32-bit MIPS-like instruction set, with the following:
//! 1. **Common:** Bounded slot queues, register file, data memory, errors.
//! 2. **ISA:** Binary-word decoding, instruction model, disassembly.
//! 3. **Core:** The six-stage pipeline (fetch, issue, ALU, memory-address,
//!    memory, writeback), register scoreboard, and functional units.
//! 4. **Simulation:** Program loader, per-cycle trace writer, run loop.

/// Common types (slot queue, register file, data memory, constants, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (pipeline queues, scoreboard, stages, functional units).
pub mod core;
/// Instruction set (decode, instruction model, disassembly).
pub mod isa;
/// Program loader, trace formatter, and simulation loop.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, queues, and stage latches.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`, drive with `run`.
pub use crate::sim::Simulator;
