//! Data Forwarding.
//!
//! The Execute stage reads its operands after Data-Fetch has refreshed the
//! DF/WB latch for this cycle, but before that result is committed (it
//! commits when Writeback runs on the next clock). Forwarding the pending
//! DF/WB result makes a value produced by instruction *i* visible to
//! instruction *i+1* one cycle ahead of its commit, so back-to-back
//! dependent instructions never observe a stale register.

use crate::common::constants::REG_ZERO;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::latches::DfWbLatch;

/// Reads a source operand through the DF/WB bypass.
///
/// # Arguments
///
/// * `regs` - Committed register file.
/// * `pending` - DF/WB latch holding the next result to be committed.
/// * `idx` - Source register index.
///
/// # Returns
///
/// Zero for `$0`, the pending result when it targets `idx`, otherwise the
/// committed register value.
#[inline(always)]
pub fn read_operand(regs: &Gpr, pending: &DfWbLatch, idx: usize) -> u64 {
    if idx == REG_ZERO {
        0
    } else if pending.dest == idx {
        pending.result
    } else {
        regs.read(idx)
    }
}

/// Reads both source operands of an instruction through the bypass.
///
/// # Returns
///
/// `(rs_value, rt_value)`.
#[inline(always)]
pub fn forward_operands(regs: &Gpr, pending: &DfWbLatch, rs: usize, rt: usize) -> (u64, u64) {
    (
        read_operand(regs, pending, rs),
        read_operand(regs, pending, rt),
    )
}
