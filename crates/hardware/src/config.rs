//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (start PC, output file names).
//! 2. **Structures:** Hierarchical config for general behavior and output.
//!
//! The CLI uses `Config::default()`; deserialization from JSON is supported
//! for embedding the simulator elsewhere.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Program counter at reset; the first program word lives here.
    pub const START_PC: u32 = 256;

    /// Default path of the disassembly listing.
    pub const DISASSEMBLY_PATH: &str = "disassembly.txt";

    /// Default path of the per-cycle trace.
    pub const SIMULATION_PATH: &str = "simulation.txt";
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Program counter at reset.
    pub start_pc: u32,
    /// Emit per-cycle pipeline decisions to stderr.
    pub trace_pipeline: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            start_pc: defaults::START_PC,
            trace_pipeline: false,
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the disassembly listing is written.
    pub disassembly_path: String,
    /// Where the per-cycle trace is written.
    pub simulation_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            disassembly_path: defaults::DISASSEMBLY_PATH.to_string(),
            simulation_path: defaults::SIMULATION_PATH.to_string(),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Output file locations.
    pub output: OutputConfig,
}
