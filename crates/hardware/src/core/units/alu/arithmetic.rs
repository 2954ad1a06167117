//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32. The comparisons return 1 or 0.

use crate::core::pipeline::signals::AluOp;

/// Executes an arithmetic or comparison operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        _ => 0,
    }
}
