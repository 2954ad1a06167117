//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It
//! reads the next instruction word from IMEM at the fetch counter held in
//! the IF/RD latch and advances that counter, wrapping inside IMEM.

use crate::common::constants::{INSTRUCTION_SIZE, PC_MASK};
use crate::core::Rsp;

/// Executes the instruction fetch stage of the pipeline.
///
/// Loads the big-endian word at IMEM offset `ifrd.pc`, tags the latch with
/// that address, stores the word in host order, and advances `ifrd.pc` by
/// one instruction, masked so it wraps to 0 after `0xFFC`.
///
/// # Arguments
///
/// * `rsp` - Mutable reference to the processor state
pub fn fetch_stage(rsp: &mut Rsp) {
    let pc = rsp.pipeline.ifrd.pc;
    let iw = rsp.mem.fetch(pc);

    let latch = &mut rsp.pipeline.ifrd;
    latch.common.pc = pc;
    latch.pc = pc.wrapping_add(INSTRUCTION_SIZE) & PC_MASK;
    latch.iw = iw;
}
