//! Register Fetch / Decode (RD) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It
//! decodes the word staged by Fetch into an opcode descriptor. Operands are
//! not read here: Execute reads them through the forwarding path so that
//! the freshest pending result is visible.

use crate::core::Rsp;
use crate::isa::decode::decode;

/// Executes the register fetch / decode stage of the pipeline.
///
/// Copies the common metadata and raw instruction word from the IF/RD latch
/// into the RD/EX latch together with the decoded opcode descriptor.
/// Decoding is total, so this stage cannot fail.
///
/// # Arguments
///
/// * `rsp` - Mutable reference to the processor state
pub fn decode_stage(rsp: &mut Rsp) {
    let ifrd = rsp.pipeline.ifrd;
    let rdex = &mut rsp.pipeline.rdex;

    rdex.common = ifrd.common;
    rdex.opcode = decode(ifrd.iw);
    rdex.iw = ifrd.iw;
}
