//! Execution units and functional components.
//!
//! This module contains the functional units the execute dispatch drives:
//! the ALU, the branch resolution unit and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit for DMEM access operations.
pub mod lsu;
