//! Global System Constants.
//!
//! This module defines constants shared across the signal processor model. It includes:
//! 1. **Memory Constants:** Sizes and offsets of the local DMEM/IMEM store.
//! 2. **Fetch Constants:** Program counter width and the fetch window mask.
//! 3. **Register Constants:** Register file size and well-known register indices.

/// Total size of the local memory store in bytes (DMEM followed by IMEM).
pub const SP_MEM_SIZE: usize = 0x2000;

/// Size of the data memory (DMEM) region in bytes.
pub const DMEM_SIZE: usize = 0x1000;

/// Size of the instruction memory (IMEM) region in bytes.
pub const IMEM_SIZE: usize = 0x1000;

/// Byte offset of IMEM inside the local memory store.
pub const IMEM_BASE: usize = 0x1000;

/// Mask applied to data addresses; keeps every access inside DMEM.
pub const DMEM_ADDR_MASK: u32 = 0xFFF;

/// Mask applied to the program counter: word aligned and wrapped to IMEM.
pub const PC_MASK: u32 = 0xFFC;

/// Size of a scalar instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Hardwired zero register.
pub const REG_ZERO: usize = 0;

/// Link register written by `JAL`, `BLTZAL` and `BGEZAL`.
pub const REG_RA: usize = 31;

/// Number of coprocessor-0 registers (eight SP registers, eight DP registers).
pub const NUM_CP0_REGS: usize = 16;
