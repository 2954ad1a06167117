//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the scalar ALU used in the Execute stage. Every
//! operation works on 32-bit operands and produces a 32-bit result; the
//! unit never traps on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Slt, Sltu
//! - [`logic`]:      And, Or, Xor, Nor, Lui
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic and comparison operations.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit for the scalar integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand (`rs`, or the value to shift).
    /// * `b`  - Second operand (`rt`, an immediate, or the shift amount).
    ///
    /// # Examples
    ///
    /// ```
    /// use rspsim_core::core::units::alu::Alu;
    /// use rspsim_core::core::pipeline::signals::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, (-5_i32) as u32, 10), 1);
    /// assert_eq!(Alu::execute(AluOp::Sll, 0x1, 4), 0x10);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::Slt | AluOp::Sltu => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor | AluOp::Lui => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
