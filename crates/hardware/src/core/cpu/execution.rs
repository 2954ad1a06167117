//! Main Execution Loop.
//!
//! This module implements the clock of the processor. It performs the following:
//! 1. **Halt Gate:** A clock requested while SP_STATUS.HALT is set changes nothing.
//! 2. **Pipeline Coordination:** Invokes the five stages in reverse pipeline order,
//!    so every stage consumes the latch its predecessor produced on the previous
//!    clock before that latch is overwritten.
//! 3. **Reset:** Returns registers, latches and control state to power-on values.

use super::Rsp;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Rsp {
    /// Advances the processor by one clock.
    ///
    /// Writeback runs first and Fetch last. Data-Fetch must precede Execute:
    /// the operand bypass in Execute reads the DF/WB latch it has just filled.
    pub fn cycle(&mut self) {
        if self.cp0.halted() {
            self.stats.halted_cycles += 1;
            return;
        }
        self.stats.cycles += 1;

        wb_stage(self);
        mem_stage(self);
        execute_stage(self);
        decode_stage(self);
        fetch_stage(self);
    }

    /// Runs up to `n` clocks, stopping early once the processor halts.
    ///
    /// # Returns
    ///
    /// The number of clocks that advanced the pipeline.
    pub fn run(&mut self, n: u64) -> u64 {
        let mut advanced = 0;
        while advanced < n && !self.cp0.halted() {
            self.cycle();
            advanced += 1;
        }
        advanced
    }

    /// Zeroes registers and latches and restores coprocessor 0 to its
    /// power-on (halted) state. Local memory and statistics are kept.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.pipeline.init();
        self.cp0.reset();
        tracing::debug!("processor reset");
    }
}
