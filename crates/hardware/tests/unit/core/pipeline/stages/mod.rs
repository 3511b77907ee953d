/// Fetch stage tests.
pub mod fetch;
/// Memory stage tests.
pub mod mem;
/// Memory-address lane tests.
pub mod mem_addr;
