//! Architectural state of the signal processor.
//!
//! This module contains the programmer-visible register files:
//! 1. **GPRs:** The scalar general-purpose register file with hardwired `$0`.
//! 2. **CP0:** Status and control registers, including the halt bit.

/// Coprocessor-0 status and control registers.
pub mod cp0;

/// General-Purpose Register file implementation.
pub mod gpr;
