//! Scalar Unit Primary Opcodes.
//!
//! Defines the primary opcodes (bits 31-26) of the scalar instruction set.

/// Register-register ALU, shifts, `JR`/`JALR` and `BREAK` (selected by `funct`).
pub const OP_SPECIAL: u32 = 0x00;

/// Compare-with-zero branches (selected by `rt`).
pub const OP_REGIMM: u32 = 0x01;

/// Jump.
pub const OP_J: u32 = 0x02;

/// Jump and link.
pub const OP_JAL: u32 = 0x03;

/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;

/// Branch on not equal.
pub const OP_BNE: u32 = 0x05;

/// Branch on less than or equal to zero.
pub const OP_BLEZ: u32 = 0x06;

/// Branch on greater than zero.
pub const OP_BGTZ: u32 = 0x07;

/// Add immediate. The scalar unit never traps, so this aliases `ADDIU`.
pub const OP_ADDI: u32 = 0x08;

/// Add immediate unsigned.
pub const OP_ADDIU: u32 = 0x09;

/// Set on less than immediate.
pub const OP_SLTI: u32 = 0x0A;

/// Set on less than immediate unsigned.
pub const OP_SLTIU: u32 = 0x0B;

/// AND immediate.
pub const OP_ANDI: u32 = 0x0C;

/// OR immediate.
pub const OP_ORI: u32 = 0x0D;

/// XOR immediate.
pub const OP_XORI: u32 = 0x0E;

/// Load upper immediate.
pub const OP_LUI: u32 = 0x0F;

/// Coprocessor 0 moves (selected by `rs`).
pub const OP_COP0: u32 = 0x10;

/// Coprocessor 2 (vector unit). Not modeled by the scalar pipeline.
pub const OP_COP2: u32 = 0x12;

/// Load byte.
pub const OP_LB: u32 = 0x20;

/// Load halfword.
pub const OP_LH: u32 = 0x21;

/// Load word.
pub const OP_LW: u32 = 0x23;

/// Load byte unsigned.
pub const OP_LBU: u32 = 0x24;

/// Load halfword unsigned.
pub const OP_LHU: u32 = 0x25;

/// Store byte.
pub const OP_SB: u32 = 0x28;

/// Store halfword.
pub const OP_SH: u32 = 0x29;

/// Store word.
pub const OP_SW: u32 = 0x2B;

/// Vector load (vector unit). Not modeled by the scalar pipeline.
pub const OP_LWC2: u32 = 0x32;

/// Vector store (vector unit). Not modeled by the scalar pipeline.
pub const OP_SWC2: u32 = 0x3A;
