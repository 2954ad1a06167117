//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage scalar pipeline.
//! It includes the following components:
//! 1. **Hazards:** The DF/WB operand bypass used by Execute.
//! 2. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 3. **Signals:** Operation selectors handed to the functional units.
//! 4. **Stages:** Fetch, Register-Fetch/Decode, Execute, Data-Fetch and Writeback.

/// Operand forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/RD, RD/EX, EX/DF, DF/WB).
pub mod latches;

/// Control signals consumed by the functional units.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

pub use latches::Pipeline;
