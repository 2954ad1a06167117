//! Scalar Unit (SU) Instruction Set.
//!
//! Defines the encodings of the signal processor's scalar integer instructions.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26).
//! - `funct`: Secondary codes: SPECIAL function field, REGIMM `rt` field and
//!   COP0 `rs` field.

/// Secondary function codes for SPECIAL, REGIMM and COP0 instructions.
pub mod funct;

/// Scalar unit primary opcodes.
pub mod opcodes;
