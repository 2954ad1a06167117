//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! is the only stage that durably changes the register file.

use crate::core::Rsp;

/// Executes the writeback stage of the pipeline.
///
/// Commits the DF/WB result into its destination register, then re-zeroes
/// `$0` so a write aimed at the hardwired register is discarded.
///
/// # Arguments
///
/// * `rsp` - Mutable reference to the processor state
pub fn wb_stage(rsp: &mut Rsp) {
    let dfwb = rsp.pipeline.dfwb;

    if rsp.trace && dfwb.dest != 0 {
        tracing::trace!(
            pc = dfwb.common.pc,
            "WB  ${} <= {:#010x}",
            dfwb.dest,
            dfwb.result
        );
    }

    rsp.regs.write(dfwb.dest, dfwb.result);
}
