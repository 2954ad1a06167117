//! Scalar Instruction Decoder.
//!
//! Maps a raw 32-bit instruction word to its [`OpcodeInfo`]. Decoding is
//! total: every word yields a descriptor, and anything the scalar unit does
//! not implement (vector-unit encodings, reserved function codes) decodes to
//! [`Opcode::Invalid`].

use crate::isa::instruction::InstructionBits;
use crate::isa::opcode::{Opcode, OpcodeInfo};
use crate::isa::su::{funct, opcodes};

/// Decodes an instruction word into its opcode descriptor.
///
/// # Arguments
///
/// * `iw` - Raw instruction word in host byte order.
///
/// # Returns
///
/// The opcode descriptor. Never fails; unknown encodings map to
/// [`Opcode::Invalid`].
pub fn decode(iw: u32) -> OpcodeInfo {
    OpcodeInfo::new(decode_id(iw))
}

/// Decodes just the operation identifier of `iw`.
pub fn decode_id(iw: u32) -> Opcode {
    match iw.opcode() {
        opcodes::OP_SPECIAL => decode_special(iw.funct()),
        opcodes::OP_REGIMM => decode_regimm(iw.rt() as u32),
        opcodes::OP_J => Opcode::J,
        opcodes::OP_JAL => Opcode::Jal,
        opcodes::OP_BEQ => Opcode::Beq,
        opcodes::OP_BNE => Opcode::Bne,
        opcodes::OP_BLEZ => Opcode::Blez,
        opcodes::OP_BGTZ => Opcode::Bgtz,
        opcodes::OP_ADDI | opcodes::OP_ADDIU => Opcode::Addiu,
        opcodes::OP_SLTI => Opcode::Slti,
        opcodes::OP_SLTIU => Opcode::Sltiu,
        opcodes::OP_ANDI => Opcode::Andi,
        opcodes::OP_ORI => Opcode::Ori,
        opcodes::OP_XORI => Opcode::Xori,
        opcodes::OP_LUI => Opcode::Lui,
        opcodes::OP_COP0 => decode_cop0(iw.rs() as u32),
        opcodes::OP_LB => Opcode::Lb,
        opcodes::OP_LH => Opcode::Lh,
        opcodes::OP_LW => Opcode::Lw,
        opcodes::OP_LBU => Opcode::Lbu,
        opcodes::OP_LHU => Opcode::Lhu,
        opcodes::OP_SB => Opcode::Sb,
        opcodes::OP_SH => Opcode::Sh,
        opcodes::OP_SW => Opcode::Sw,
        // COP2, LWC2 and SWC2 belong to the vector unit.
        _ => Opcode::Invalid,
    }
}

fn decode_special(f: u32) -> Opcode {
    match f {
        funct::SLL => Opcode::Sll,
        funct::SRL => Opcode::Srl,
        funct::SRA => Opcode::Sra,
        funct::SLLV => Opcode::Sllv,
        funct::SRLV => Opcode::Srlv,
        funct::SRAV => Opcode::Srav,
        funct::JR => Opcode::Jr,
        funct::JALR => Opcode::Jalr,
        funct::BREAK => Opcode::Break,
        funct::ADD | funct::ADDU => Opcode::Addu,
        funct::SUB | funct::SUBU => Opcode::Subu,
        funct::AND => Opcode::And,
        funct::OR => Opcode::Or,
        funct::XOR => Opcode::Xor,
        funct::NOR => Opcode::Nor,
        funct::SLT => Opcode::Slt,
        funct::SLTU => Opcode::Sltu,
        _ => Opcode::Invalid,
    }
}

fn decode_regimm(rt: u32) -> Opcode {
    match rt {
        funct::BLTZ => Opcode::Bltz,
        funct::BGEZ => Opcode::Bgez,
        funct::BLTZAL => Opcode::Bltzal,
        funct::BGEZAL => Opcode::Bgezal,
        _ => Opcode::Invalid,
    }
}

fn decode_cop0(rs: u32) -> Opcode {
    match rs {
        funct::MFC0 => Opcode::Mfc0,
        funct::MTC0 => Opcode::Mtc0,
        _ => Opcode::Invalid,
    }
}
