//! Pipeline implementation.
//!
//! This module contains the inter-stage plumbing of the dual-issue
//! pipeline:
//! 1. **Latches:** The six fixed-capacity queues and their payload types.
//! 2. **Scoreboard:** Register lock bookkeeping and hazard predicates.
//! 3. **Stages:** Fetch, issue, ALU, memory-address, memory, and writeback,
//!    each split into a Consume and a Produce phase.

/// Inter-stage queues and payload types.
pub mod latches;
/// Register locks and RAW/WAW/WAR hazard predicates.
pub mod scoreboard;
/// Pipeline stage implementations.
pub mod stages;
