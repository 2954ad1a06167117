//! Opcode handler table.
//!
//! One handler per [`Opcode`], selected by an exhaustive match. A handler
//! receives the raw instruction word and both forwarded operands, and is
//! responsible for:
//! 1. **Result:** Setting the EX/DF destination and result when the
//!    instruction writes a register (the destination defaults to `$0`).
//! 2. **DMEM Access:** Performing loads and stores immediately.
//! 3. **Control Flow:** Redirecting the fetch counter for taken branches.
//! 4. **Control Registers:** `MFC0`, `MTC0` and `BREAK` side effects.
//!
//! Handlers never advance the pipeline themselves.

use crate::common::constants::REG_RA;
use crate::core::Rsp;
use crate::core::pipeline::signals::{AluOp, BranchCond, MemWidth};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcode::Opcode;

/// Dispatches one instruction to its handler.
///
/// # Arguments
///
/// * `rsp` - Processor state; `pipeline.rdex` still holds the instruction.
/// * `op` - Decoded operation.
/// * `iw` - Raw instruction word.
/// * `rs` - Forwarded value of register `rs`.
/// * `rt` - Forwarded value of register `rt`.
pub fn execute_opcode(rsp: &mut Rsp, op: Opcode, iw: u32, rs: u32, rt: u32) {
    if iw != 0 {
        rsp.stats.instructions_executed += 1;
    }

    match op {
        Opcode::Invalid => invalid(rsp, iw),

        Opcode::Addu => reg_alu(rsp, iw, AluOp::Add, rs, rt),
        Opcode::Subu => reg_alu(rsp, iw, AluOp::Sub, rs, rt),
        Opcode::And => reg_alu(rsp, iw, AluOp::And, rs, rt),
        Opcode::Or => reg_alu(rsp, iw, AluOp::Or, rs, rt),
        Opcode::Xor => reg_alu(rsp, iw, AluOp::Xor, rs, rt),
        Opcode::Nor => reg_alu(rsp, iw, AluOp::Nor, rs, rt),
        Opcode::Slt => reg_alu(rsp, iw, AluOp::Slt, rs, rt),
        Opcode::Sltu => reg_alu(rsp, iw, AluOp::Sltu, rs, rt),

        Opcode::Sll => reg_alu(rsp, iw, AluOp::Sll, rt, iw.sa()),
        Opcode::Srl => reg_alu(rsp, iw, AluOp::Srl, rt, iw.sa()),
        Opcode::Sra => reg_alu(rsp, iw, AluOp::Sra, rt, iw.sa()),
        Opcode::Sllv => reg_alu(rsp, iw, AluOp::Sll, rt, rs),
        Opcode::Srlv => reg_alu(rsp, iw, AluOp::Srl, rt, rs),
        Opcode::Srav => reg_alu(rsp, iw, AluOp::Sra, rt, rs),

        Opcode::Addiu => imm_alu(rsp, iw, AluOp::Add, rs, iw.simm()),
        Opcode::Slti => imm_alu(rsp, iw, AluOp::Slt, rs, iw.simm()),
        Opcode::Sltiu => imm_alu(rsp, iw, AluOp::Sltu, rs, iw.simm()),
        Opcode::Andi => imm_alu(rsp, iw, AluOp::And, rs, iw.imm()),
        Opcode::Ori => imm_alu(rsp, iw, AluOp::Or, rs, iw.imm()),
        Opcode::Xori => imm_alu(rsp, iw, AluOp::Xor, rs, iw.imm()),
        Opcode::Lui => imm_alu(rsp, iw, AluOp::Lui, 0, iw.imm()),

        Opcode::Beq => branch(rsp, iw, BranchCond::Eq, rs, rt, false),
        Opcode::Bne => branch(rsp, iw, BranchCond::Ne, rs, rt, false),
        Opcode::Bltz => branch(rsp, iw, BranchCond::Ltz, rs, rt, false),
        Opcode::Bgez => branch(rsp, iw, BranchCond::Gez, rs, rt, false),
        Opcode::Blez => branch(rsp, iw, BranchCond::Lez, rs, rt, false),
        Opcode::Bgtz => branch(rsp, iw, BranchCond::Gtz, rs, rt, false),
        Opcode::Bltzal => branch(rsp, iw, BranchCond::Ltz, rs, rt, true),
        Opcode::Bgezal => branch(rsp, iw, BranchCond::Gez, rs, rt, true),

        Opcode::J => jump(rsp, Bru::jump_target(iw), None),
        Opcode::Jal => jump(rsp, Bru::jump_target(iw), Some(REG_RA)),
        Opcode::Jr => jump(rsp, Bru::register_target(rs), None),
        Opcode::Jalr => jump(rsp, Bru::register_target(rs), Some(iw.rd())),

        Opcode::Lb => load(rsp, iw, rs, MemWidth::Byte, true),
        Opcode::Lbu => load(rsp, iw, rs, MemWidth::Byte, false),
        Opcode::Lh => load(rsp, iw, rs, MemWidth::Half, true),
        Opcode::Lhu => load(rsp, iw, rs, MemWidth::Half, false),
        Opcode::Lw => load(rsp, iw, rs, MemWidth::Word, false),
        Opcode::Sb => store(rsp, iw, rs, rt, MemWidth::Byte),
        Opcode::Sh => store(rsp, iw, rs, rt, MemWidth::Half),
        Opcode::Sw => store(rsp, iw, rs, rt, MemWidth::Word),

        Opcode::Mfc0 => {
            let value = rsp.cp0.read(iw.rd());
            set_result(rsp, iw.rt(), value);
        }
        Opcode::Mtc0 => rsp.cp0.write(iw.rd(), rt),
        Opcode::Break => rsp.cp0.signal_break(),
    }
}

#[inline(always)]
fn set_result(rsp: &mut Rsp, dest: usize, value: u32) {
    let exdf = &mut rsp.pipeline.exdf;
    exdf.dest = dest;
    exdf.result = u64::from(value);
}

fn invalid(rsp: &mut Rsp, iw: u32) {
    rsp.stats.invalid_opcodes += 1;
    tracing::debug!(
        pc = rsp.pipeline.rdex.common.pc,
        iw,
        "invalid opcode ignored"
    );
}

/// `rd <- a op b`.
fn reg_alu(rsp: &mut Rsp, iw: u32, op: AluOp, a: u32, b: u32) {
    set_result(rsp, iw.rd(), Alu::execute(op, a, b));
}

/// `rt <- a op imm`.
fn imm_alu(rsp: &mut Rsp, iw: u32, op: AluOp, a: u32, imm: u32) {
    set_result(rsp, iw.rt(), Alu::execute(op, a, imm));
}

fn branch(rsp: &mut Rsp, iw: u32, cond: BranchCond, rs: u32, rt: u32, link: bool) {
    let pc = rsp.pipeline.rdex.common.pc;
    if link {
        set_result(rsp, REG_RA, Bru::link_address(pc));
    }
    if Bru::taken(cond, rs, rt) {
        rsp.stats.branches_taken += 1;
        rsp.pipeline.ifrd.pc = Bru::branch_target(pc, iw);
    }
}

fn jump(rsp: &mut Rsp, target: u32, link: Option<usize>) {
    let pc = rsp.pipeline.rdex.common.pc;
    if let Some(dest) = link {
        set_result(rsp, dest, Bru::link_address(pc));
    }
    rsp.stats.branches_taken += 1;
    rsp.pipeline.ifrd.pc = target;
}

fn load(rsp: &mut Rsp, iw: u32, rs: u32, width: MemWidth, signed: bool) {
    rsp.stats.loads += 1;
    let addr = Lsu::effective_address(rs, iw.simm());
    let value = Lsu::load(&rsp.mem, addr, width, signed);
    set_result(rsp, iw.rt(), value);
}

fn store(rsp: &mut Rsp, iw: u32, rs: u32, rt: u32, width: MemWidth) {
    rsp.stats.stores += 1;
    let addr = Lsu::effective_address(rs, iw.simm());
    Lsu::store(&mut rsp.mem, addr, width, rt);
}
