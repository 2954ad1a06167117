//! Signal Processor Local Memory.
//!
//! This module implements the processor's private 8 KiB store. It provides:
//! 1. **Layout:** DMEM at `0x0000..0x1000` followed by IMEM at `0x1000..0x2000`.
//! 2. **Byte Order:** Contents are big-endian; word accessors convert to host order.
//! 3. **Host Access:** Bulk loading of images into either region.
//!
//! Every address is masked into the store, so no accessor can fail or panic.

use crate::common::constants::{DMEM_SIZE, IMEM_BASE, IMEM_SIZE, PC_MASK, SP_MEM_SIZE};
use crate::common::error::{LoadError, Region};

const ADDR_MASK: usize = SP_MEM_SIZE - 1;

/// Local DMEM + IMEM store.
#[derive(Clone, PartialEq, Eq)]
pub struct SpMemory {
    bytes: Box<[u8]>,
}

impl std::fmt::Debug for SpMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpMemory")
            .field("size", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl Default for SpMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl SpMemory {
    /// Creates a zero-filled store.
    pub fn new() -> Self {
        Self {
            bytes: vec![0; SP_MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Reads a byte; `addr` wraps inside the 8 KiB store.
    #[inline(always)]
    pub fn read_u8(&self, addr: usize) -> u8 {
        self.bytes[addr & ADDR_MASK]
    }

    /// Writes a byte; `addr` wraps inside the 8 KiB store.
    #[inline(always)]
    pub fn write_u8(&mut self, addr: usize, val: u8) {
        self.bytes[addr & ADDR_MASK] = val;
    }

    /// Reads a big-endian word, byte by byte with wraparound.
    pub fn read_u32(&self, addr: usize) -> u32 {
        u32::from_be_bytes([
            self.read_u8(addr),
            self.read_u8(addr + 1),
            self.read_u8(addr + 2),
            self.read_u8(addr + 3),
        ])
    }

    /// Writes a big-endian word, byte by byte with wraparound.
    pub fn write_u32(&mut self, addr: usize, val: u32) {
        for (i, b) in val.to_be_bytes().into_iter().enumerate() {
            self.write_u8(addr + i, b);
        }
    }

    /// Fetches the instruction word at IMEM offset `pc`, in host byte order.
    ///
    /// `pc` is masked to a word-aligned IMEM offset first, so the four bytes
    /// are always contiguous and in range.
    #[inline(always)]
    pub fn fetch(&self, pc: u32) -> u32 {
        let base = IMEM_BASE + (pc & PC_MASK) as usize;
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[base..base + 4]);
        u32::from_be_bytes(word)
    }

    /// Stores a sequence of instruction words into IMEM starting at offset `pc`.
    ///
    /// Words past the end of IMEM wrap back to its start, like the fetch counter.
    pub fn write_program(&mut self, pc: u32, words: &[u32]) {
        let mut pc = pc & PC_MASK;
        for &w in words {
            self.write_u32(IMEM_BASE + pc as usize, w);
            pc = (pc + 4) & PC_MASK;
        }
    }

    /// Copies `data` into `region` at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ImageTooLarge`] if the data does not fit in the
    /// region; memory is left untouched in that case.
    pub fn load(&mut self, region: Region, offset: usize, data: &[u8]) -> Result<(), LoadError> {
        let (base, limit) = match region {
            Region::Dmem => (0, DMEM_SIZE),
            Region::Imem => (IMEM_BASE, IMEM_SIZE),
        };
        if offset.checked_add(data.len()).is_none_or(|end| end > limit) {
            return Err(LoadError::ImageTooLarge {
                region,
                offset,
                len: data.len(),
                limit,
            });
        }
        let start = base + offset;
        self.bytes[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// DMEM contents.
    pub fn dmem(&self) -> &[u8] {
        &self.bytes[..DMEM_SIZE]
    }

    /// IMEM contents.
    pub fn imem(&self) -> &[u8] {
        &self.bytes[IMEM_BASE..]
    }

    /// Zero-fills both regions.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
