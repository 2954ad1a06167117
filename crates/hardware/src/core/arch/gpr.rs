//! General-Purpose Register File.
//!
//! This module implements the scalar unit's general-purpose register file.
//! It performs the following:
//! 1. **Storage:** Maintains 32 registers (`$0`-`$31`) with 64-bit slots.
//! 2. **Invariant Enforcement:** Register `$0` is re-zeroed after every write,
//!    so it reads as zero whatever was last stored into its slot.
//! 3. **Debugging:** Formats the complete register state for dumps.

use std::fmt;

use crate::common::constants::{NUM_GPRS, REG_ZERO};

/// General-Purpose Register file.
///
/// Writes land in the slot unconditionally and slot 0 is then forced back
/// to zero, the same commit sequence the Writeback stage performs in
/// hardware.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_GPRS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register slot.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Writes a register slot, then re-zeroes `$0`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to store.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
        self.regs[REG_ZERO] = 0;
    }

    /// Returns all register slots.
    pub const fn as_array(&self) -> &[u64; NUM_GPRS] {
        &self.regs
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_GPRS];
    }
}

impl fmt::Display for Gpr {
    /// Registers in pairs, one pair per line, as 32-bit hex values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_GPRS).step_by(2) {
            writeln!(
                f,
                "${:<2}={:#010x} ${:<2}={:#010x}",
                i,
                self.regs[i] as u32,
                i + 1,
                self.regs[i + 1] as u32
            )?;
        }
        Ok(())
    }
}
