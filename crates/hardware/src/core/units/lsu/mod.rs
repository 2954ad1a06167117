//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for the scalar
//! unit's DMEM accesses. It includes:
//! - [`unaligned`]: Byte-granular access that wraps inside DMEM.
//!
//! Effective addresses are `rs + sext(imm)` masked to the 4 KiB DMEM window.
//! The unit never faults: misaligned accesses are assembled byte by byte.

/// Byte-granular, wrapping DMEM access.
pub mod unaligned;

use crate::common::constants::DMEM_ADDR_MASK;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::memory::SpMemory;

/// Load/Store Unit (LSU) for DMEM operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes the DMEM address of a load or store.
    ///
    /// # Arguments
    ///
    /// * `base` - Value of the base register `rs`.
    /// * `offset` - Sign-extended 16-bit offset.
    #[inline(always)]
    pub const fn effective_address(base: u32, offset: u32) -> u32 {
        base.wrapping_add(offset) & DMEM_ADDR_MASK
    }

    /// Loads a value from DMEM.
    ///
    /// # Arguments
    ///
    /// * `mem` - Local memory.
    /// * `addr` - DMEM address (masked again internally).
    /// * `width` - Access width.
    /// * `signed` - Sign-extend sub-word values when `true`.
    ///
    /// # Returns
    ///
    /// The loaded value, extended to 32 bits.
    pub fn load(mem: &SpMemory, addr: u32, width: MemWidth, signed: bool) -> u32 {
        let raw = unaligned::read(mem, addr, width.bytes());
        match (width, signed) {
            (MemWidth::Byte, true) => raw as u8 as i8 as i32 as u32,
            (MemWidth::Half, true) => raw as u16 as i16 as i32 as u32,
            _ => raw,
        }
    }

    /// Stores the low `width` bytes of `value` to DMEM.
    pub fn store(mem: &mut SpMemory, addr: u32, width: MemWidth, value: u32) {
        unaligned::write(mem, addr, width.bytes(), value);
    }
}
