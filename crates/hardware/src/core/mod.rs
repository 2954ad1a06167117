//! Core processor implementation.
//!
//! This module contains the scalar unit of the signal processor: the
//! five-stage pipeline, the functional units it dispatches to, the
//! architectural register files, and the processor aggregate that owns them.

/// Architectural state (general-purpose registers, coprocessor 0).
pub mod arch;

/// Processor aggregate and clock driver.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, forwarding, signals).
pub mod pipeline;

/// Execution units (ALU, LSU, branch unit).
pub mod units;

pub use self::cpu::Rsp;
