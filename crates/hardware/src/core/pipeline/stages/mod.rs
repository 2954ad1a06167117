//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages
//! of the instruction pipeline. It includes:
//! 1. **Fetch:** Reads the next instruction word from IMEM.
//! 2. **Decode:** Decodes the word into an opcode descriptor.
//! 3. **Execute:** Reads forwarded operands and dispatches to the opcode handler.
//! 4. **Memory:** Carries the result one stage further (data fetch).
//! 5. **Writeback:** Commits the result to the register file.
//!
//! Each stage reads only the latch produced by its predecessor on the
//! previous clock, which holds as long as the driver invokes them in reverse
//! pipeline order.

/// Register fetch / decode stage implementation.
pub mod decode;

/// Execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Data fetch (memory) stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (RD stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Data fetch stage entry point (DF stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
