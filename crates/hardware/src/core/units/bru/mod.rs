//! Branch Resolution Unit (BRU).
//!
//! Branches resolve in Execute with no prediction. A taken branch rewrites
//! the fetch counter held in the IF/RD latch before Instruction-Fetch runs
//! in the same clock, so the instruction already in Register-Fetch (the
//! delay slot) still executes and the target is fetched next.

use crate::common::constants::{INSTRUCTION_SIZE, PC_MASK};
use crate::core::pipeline::signals::BranchCond;
use crate::isa::instruction::InstructionBits;

/// Branch resolution helpers.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition on 32-bit operands.
    pub const fn taken(cond: BranchCond, rs: u32, rt: u32) -> bool {
        let s = rs as i32;
        match cond {
            BranchCond::Eq => rs == rt,
            BranchCond::Ne => rs != rt,
            BranchCond::Ltz => s < 0,
            BranchCond::Gez => s >= 0,
            BranchCond::Lez => s <= 0,
            BranchCond::Gtz => s > 0,
        }
    }

    /// Target of a PC-relative branch at `pc`: the delay slot address plus
    /// the word offset in the immediate, wrapped into IMEM.
    pub fn branch_target(pc: u32, iw: u32) -> u32 {
        pc.wrapping_add(INSTRUCTION_SIZE)
            .wrapping_add(iw.simm() << 2)
            & PC_MASK
    }

    /// Target of a `J`/`JAL`.
    pub fn jump_target(iw: u32) -> u32 {
        (iw.target() << 2) & PC_MASK
    }

    /// Target of a `JR`/`JALR`.
    pub const fn register_target(rs: u32) -> u32 {
        rs & PC_MASK
    }

    /// Return address written by linking branches and jumps at `pc`:
    /// the instruction after the delay slot.
    pub const fn link_address(pc: u32) -> u32 {
        pc.wrapping_add(2 * INSTRUCTION_SIZE) & PC_MASK
    }
}
