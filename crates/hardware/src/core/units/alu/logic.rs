//! ALU bitwise logical operations.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical operation.
///
/// `Lui` ignores `a` and places the low half of `b` in the upper half-word.
/// Returns `0` for non-logical opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Lui => b << 16,
        _ => 0,
    }
}
