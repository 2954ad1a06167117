//! Data Fetch (DF) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Loads and stores complete their DMEM access inside the Execute dispatch,
//! so this stage only moves the result one latch further. It keeps the
//! five-stage depth: a result commits four clocks after its fetch.

use crate::core::Rsp;

/// Executes the data fetch stage of the pipeline.
///
/// Copies common metadata, destination and result from the EX/DF latch into
/// the DF/WB latch.
///
/// # Arguments
///
/// * `rsp` - Mutable reference to the processor state
pub fn mem_stage(rsp: &mut Rsp) {
    let exdf = rsp.pipeline.exdf;
    let dfwb = &mut rsp.pipeline.dfwb;

    dfwb.common = exdf.common;
    dfwb.result = exdf.result;
    dfwb.dest = exdf.dest;
}
