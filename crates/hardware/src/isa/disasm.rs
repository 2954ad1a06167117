//! Instruction Disassembler for the scalar unit.
//!
//! Converts a 32-bit instruction encoding into a human-readable string for
//! instruction tracing, logging and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use rspsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x000, 0x0022_1821); // ADDU $3, $1, $2
//! assert_eq!(text, "addu v1, at, v0");
//! ```

use crate::common::constants::PC_MASK;
use crate::isa::decode::decode_id;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcode::Opcode;

/// Conventional names for `$0`-`$31`.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "s8", "ra",
];

/// Names of the coprocessor-0 registers as seen by `MFC0`/`MTC0`.
const CP0_NAMES: [&str; 16] = [
    "sp_mem_addr",
    "sp_dram_addr",
    "sp_rd_len",
    "sp_wr_len",
    "sp_status",
    "sp_dma_full",
    "sp_dma_busy",
    "sp_semaphore",
    "dpc_start",
    "dpc_end",
    "dpc_current",
    "dpc_status",
    "dpc_clock",
    "dpc_bufbusy",
    "dpc_pipebusy",
    "dpc_tmem",
];

#[inline]
fn reg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}

#[inline]
fn cp0(idx: usize) -> &'static str {
    CP0_NAMES.get(idx & 0xF).copied().unwrap_or("c??")
}

/// Disassembles a scalar instruction fetched from IMEM offset `pc`.
///
/// Branch and jump targets are printed as resolved IMEM offsets. Invalid
/// encodings print as `invalid` followed by the raw word.
///
/// # Arguments
///
/// * `pc` - IMEM offset the instruction was fetched from.
/// * `iw` - The raw 32-bit instruction encoding.
pub fn disassemble(pc: u32, iw: u32) -> String {
    let op = decode_id(iw);
    let mn = op.mnemonic();
    let (rs, rt, rd) = (reg(iw.rs()), reg(iw.rt()), reg(iw.rd()));
    let simm = iw.simm() as i32;
    let branch_target = pc.wrapping_add(4).wrapping_add(iw.simm() << 2) & PC_MASK;

    match op {
        Opcode::Invalid => format!("{mn} {iw:#010x}"),
        Opcode::Sll if iw == 0 => "nop".to_string(),
        Opcode::Sll | Opcode::Srl | Opcode::Sra => format!("{mn} {rd}, {rt}, {}", iw.sa()),
        Opcode::Sllv | Opcode::Srlv | Opcode::Srav => format!("{mn} {rd}, {rt}, {rs}"),
        Opcode::Addu
        | Opcode::Subu
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Nor
        | Opcode::Slt
        | Opcode::Sltu => format!("{mn} {rd}, {rs}, {rt}"),
        Opcode::Addiu | Opcode::Slti | Opcode::Sltiu => format!("{mn} {rt}, {rs}, {simm}"),
        Opcode::Andi | Opcode::Ori | Opcode::Xori => format!("{mn} {rt}, {rs}, {:#x}", iw.imm()),
        Opcode::Lui => format!("{mn} {rt}, {:#x}", iw.imm()),
        Opcode::Lb
        | Opcode::Lbu
        | Opcode::Lh
        | Opcode::Lhu
        | Opcode::Lw
        | Opcode::Sb
        | Opcode::Sh
        | Opcode::Sw => format!("{mn} {rt}, {simm}({rs})"),
        Opcode::Beq | Opcode::Bne => format!("{mn} {rs}, {rt}, {branch_target:#05x}"),
        Opcode::Bgez
        | Opcode::Bgezal
        | Opcode::Bgtz
        | Opcode::Blez
        | Opcode::Bltz
        | Opcode::Bltzal => format!("{mn} {rs}, {branch_target:#05x}"),
        Opcode::J | Opcode::Jal => format!("{mn} {:#05x}", (iw.target() << 2) & PC_MASK),
        Opcode::Jr => format!("{mn} {rs}"),
        Opcode::Jalr => format!("{mn} {rd}, {rs}"),
        Opcode::Break => mn.to_string(),
        Opcode::Mfc0 | Opcode::Mtc0 => format!("{mn} {rt}, {}", cp0(iw.rd())),
    }
}
