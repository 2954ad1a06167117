//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It
//! performs the following:
//! 1. **Operand Read:** Reads `rs` and `rt` through the DF/WB bypass, so a
//!    result produced by the immediately preceding instruction is visible
//!    even though it has not been committed yet.
//! 2. **Latch Setup:** Forwards the common metadata and defaults the
//!    destination to `$0`, which turns the eventual writeback into a no-op.
//! 3. **Dispatch:** Hands the instruction to the opcode handler, which fills
//!    in the real destination and result and performs any DMEM access,
//!    branch redirect or control register side effect.

use crate::common::constants::REG_ZERO;
use crate::core::Rsp;
use crate::core::cpu::handlers::execute_opcode;
use crate::core::pipeline::hazards::forward_operands;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;

/// Executes the execute stage of the pipeline.
///
/// Must run after the Data-Fetch stage of the same clock: the operand
/// bypass reads the DF/WB latch that stage has just refreshed.
///
/// # Arguments
///
/// * `rsp` - Mutable reference to the processor state
pub fn execute_stage(rsp: &mut Rsp) {
    let rdex = rsp.pipeline.rdex;
    let iw = rdex.iw;

    let (rs, rt) = forward_operands(&rsp.regs, &rsp.pipeline.dfwb, iw.rs(), iw.rt());

    if rsp.trace {
        tracing::trace!(
            pc = rdex.common.pc,
            "EX  {:#05x}: {}",
            rdex.common.pc,
            disassemble(rdex.common.pc, iw)
        );
    }

    let exdf = &mut rsp.pipeline.exdf;
    exdf.common = rdex.common;
    exdf.dest = REG_ZERO;

    execute_opcode(rsp, rdex.opcode.id, iw, rs as u32, rt as u32);
}
