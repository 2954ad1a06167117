//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL) and
//! shift-right arithmetic (SRA). Only the low five bits of the shift amount
//! are used, for both the constant and the variable forms.

use crate::core::pipeline::signals::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (upper bits ignored).
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i32) >> sh) as u32,
        _ => 0,
    }
}
