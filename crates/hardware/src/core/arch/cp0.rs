//! Coprocessor 0: status and control registers.
//!
//! This module implements the signal processor's control register file. It provides:
//! 1. **Register Indices:** The eight SP registers and eight DP command registers.
//! 2. **Status Fields:** Read-side bits of `SP_STATUS` (halt, broke, signals).
//! 3. **Write Semantics:** Set/clear command bits written to `SP_STATUS` by
//!    `MTC0` or by the host, and the read-to-acquire semaphore.
//! 4. **Halt Control:** The single bit the clock driver tests every cycle.

use crate::common::constants::NUM_CP0_REGS;

/// DMA local memory address.
pub const SP_MEM_ADDR: usize = 0;
/// DMA DRAM address.
pub const SP_DRAM_ADDR: usize = 1;
/// DMA read length.
pub const SP_RD_LEN: usize = 2;
/// DMA write length.
pub const SP_WR_LEN: usize = 3;
/// Status register.
pub const SP_STATUS: usize = 4;
/// DMA full flag (read only).
pub const SP_DMA_FULL: usize = 5;
/// DMA busy flag (read only).
pub const SP_DMA_BUSY: usize = 6;
/// Hardware semaphore.
pub const SP_SEMAPHORE: usize = 7;
/// First of the eight DP command registers (`DPC_START`).
pub const DPC_START: usize = 8;

/// Processor is halted; the pipeline does not advance.
pub const STATUS_HALT: u32 = 0x0001;
/// A `BREAK` instruction was executed.
pub const STATUS_BROKE: u32 = 0x0002;
/// DMA engine busy.
pub const STATUS_DMA_BUSY: u32 = 0x0004;
/// DMA request queue full.
pub const STATUS_DMA_FULL: u32 = 0x0008;
/// I/O full.
pub const STATUS_IO_FULL: u32 = 0x0010;
/// Single-step mode.
pub const STATUS_SSTEP: u32 = 0x0020;
/// Raise the interrupt line when `BREAK` executes.
pub const STATUS_INTR_BREAK: u32 = 0x0040;
/// Signal 0; signals 1-7 follow at successive bits.
pub const STATUS_SIG0: u32 = 0x0080;

/// Write command: clear HALT.
pub const CLR_HALT: u32 = 0x0000_0001;
/// Write command: set HALT.
pub const SET_HALT: u32 = 0x0000_0002;
/// Write command: clear BROKE.
pub const CLR_BROKE: u32 = 0x0000_0004;
/// Write command: lower the interrupt line.
pub const CLR_INTR: u32 = 0x0000_0008;
/// Write command: raise the interrupt line.
pub const SET_INTR: u32 = 0x0000_0010;
/// Write command: clear SSTEP.
pub const CLR_SSTEP: u32 = 0x0000_0020;
/// Write command: set SSTEP.
pub const SET_SSTEP: u32 = 0x0000_0040;
/// Write command: clear INTR_BREAK.
pub const CLR_INTR_BREAK: u32 = 0x0000_0080;
/// Write command: set INTR_BREAK.
pub const SET_INTR_BREAK: u32 = 0x0000_0100;
/// Write command: clear signal 0; `CLR_SIG0 << (2 * n)` clears signal `n`.
pub const CLR_SIG0: u32 = 0x0000_0200;
/// Write command: set signal 0; `SET_SIG0 << (2 * n)` sets signal `n`.
pub const SET_SIG0: u32 = 0x0000_0400;

/// Number of general-purpose signal bits in `SP_STATUS`.
pub const NUM_SIGNALS: u32 = 8;

/// Coprocessor-0 register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cp0 {
    regs: [u32; NUM_CP0_REGS],
    /// Interrupt line towards the host interrupt controller.
    pub interrupt_pending: bool,
}

impl Default for Cp0 {
    /// Power-on state: every register zero except `SP_STATUS`, which is halted.
    fn default() -> Self {
        let mut regs = [0; NUM_CP0_REGS];
        regs[SP_STATUS] = STATUS_HALT;
        Self {
            regs,
            interrupt_pending: false,
        }
    }
}

/// Applies a set/clear command pair to `status`.
///
/// Writing both command bits at once leaves the field unchanged.
#[inline]
const fn apply(status: u32, cmd: u32, clr: u32, set: u32, bit: u32) -> u32 {
    match (cmd & clr != 0, cmd & set != 0) {
        (true, false) => status & !bit,
        (false, true) => status | bit,
        _ => status,
    }
}

impl Cp0 {
    /// Creates a register file in its power-on state (halted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `SP_STATUS` value.
    #[inline(always)]
    pub const fn status(&self) -> u32 {
        self.regs[SP_STATUS]
    }

    /// Tests the halt bit.
    #[inline(always)]
    pub const fn halted(&self) -> bool {
        self.regs[SP_STATUS] & STATUS_HALT != 0
    }

    /// Reads a register as `MFC0` sees it.
    ///
    /// Reading `SP_SEMAPHORE` returns its value and then acquires it.
    pub fn read(&mut self, idx: usize) -> u32 {
        let idx = idx % NUM_CP0_REGS;
        let value = self.regs[idx];
        if idx == SP_SEMAPHORE {
            self.regs[SP_SEMAPHORE] = 1;
        }
        value
    }

    /// Reads a register without side effects.
    pub const fn peek(&self, idx: usize) -> u32 {
        self.regs[idx % NUM_CP0_REGS]
    }

    /// Writes a register as `MTC0` (or the host) does.
    ///
    /// `SP_STATUS` interprets `value` as set/clear commands, a write to
    /// `SP_SEMAPHORE` releases it, and the DMA flags are read only.
    pub fn write(&mut self, idx: usize, value: u32) {
        match idx % NUM_CP0_REGS {
            SP_STATUS => self.write_status(value),
            SP_SEMAPHORE => self.regs[SP_SEMAPHORE] = 0,
            SP_DMA_FULL | SP_DMA_BUSY => {}
            other => self.regs[other] = value,
        }
    }

    /// Applies a command word to `SP_STATUS`.
    pub fn write_status(&mut self, cmd: u32) {
        let mut status = self.regs[SP_STATUS];

        status = apply(status, cmd, CLR_HALT, SET_HALT, STATUS_HALT);
        if cmd & CLR_BROKE != 0 {
            status &= !STATUS_BROKE;
        }
        status = apply(status, cmd, CLR_SSTEP, SET_SSTEP, STATUS_SSTEP);
        status = apply(
            status,
            cmd,
            CLR_INTR_BREAK,
            SET_INTR_BREAK,
            STATUS_INTR_BREAK,
        );
        for n in 0..NUM_SIGNALS {
            status = apply(
                status,
                cmd,
                CLR_SIG0 << (2 * n),
                SET_SIG0 << (2 * n),
                STATUS_SIG0 << n,
            );
        }

        match (cmd & CLR_INTR != 0, cmd & SET_INTR != 0) {
            (true, false) => self.interrupt_pending = false,
            (false, true) => self.interrupt_pending = true,
            _ => {}
        }

        if (status ^ self.regs[SP_STATUS]) & STATUS_HALT != 0 {
            tracing::debug!(halted = status & STATUS_HALT != 0, "SP_STATUS halt changed");
        }
        self.regs[SP_STATUS] = status;
    }

    /// Records a `BREAK`: sets HALT and BROKE, and raises the interrupt
    /// line when `INTR_BREAK` is enabled.
    pub fn signal_break(&mut self) {
        self.regs[SP_STATUS] |= STATUS_HALT | STATUS_BROKE;
        if self.regs[SP_STATUS] & STATUS_INTR_BREAK != 0 {
            self.interrupt_pending = true;
        }
        tracing::debug!(
            interrupt = self.interrupt_pending,
            "BREAK: processor halted"
        );
    }

    /// Restores the power-on state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
