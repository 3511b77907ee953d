//! Simulation layer.
//!
//! Everything around the pipeline core:
//! 1. **Loader:** Program-file parsing and the disassembly listing.
//! 2. **Trace:** The byte-exact per-cycle snapshot writer.
//! 3. **Simulator:** Ownership of the CPU and the run loop.

/// Program loader and disassembly listing.
pub mod loader;
/// Simulator and run loop.
pub mod simulator;
/// Per-cycle trace formatter.
pub mod trace;

pub use loader::LoadedProgram;
pub use simulator::Simulator;
