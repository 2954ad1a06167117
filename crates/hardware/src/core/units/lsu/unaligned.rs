//! Unaligned DMEM access.
//!
//! DMEM is big-endian and accessed one byte at a time, so any address is
//! legal. A multi-byte access that runs past `0xFFF` continues at `0x000`.

use crate::common::constants::DMEM_ADDR_MASK;
use crate::soc::memory::SpMemory;

#[inline(always)]
fn byte_addr(addr: u32, i: usize) -> usize {
    (addr.wrapping_add(i as u32) & DMEM_ADDR_MASK) as usize
}

/// Reads `size` bytes (1, 2 or 4) starting at `addr`, most significant first.
pub fn read(mem: &SpMemory, addr: u32, size: usize) -> u32 {
    (0..size).fold(0u32, |acc, i| {
        (acc << 8) | u32::from(mem.read_u8(byte_addr(addr, i)))
    })
}

/// Writes the low `size` bytes (1, 2 or 4) of `value` starting at `addr`,
/// most significant first.
pub fn write(mem: &mut SpMemory, addr: u32, size: usize, value: u32) {
    for i in 0..size {
        let shift = 8 * (size - 1 - i);
        mem.write_u8(byte_addr(addr, i), (value >> shift) as u8);
    }
}
