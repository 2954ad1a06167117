//! Scalar Unit Secondary Function Codes.
//!
//! The SPECIAL `funct` field (bits 5-0), the REGIMM `rt` field (bits 20-16)
//! and the COP0 `rs` field (bits 25-21) distinguish instructions that share a
//! primary opcode.

/// Shift left logical.
pub const SLL: u32 = 0x00;
/// Shift right logical.
pub const SRL: u32 = 0x02;
/// Shift right arithmetic.
pub const SRA: u32 = 0x03;
/// Shift left logical variable.
pub const SLLV: u32 = 0x04;
/// Shift right logical variable.
pub const SRLV: u32 = 0x06;
/// Shift right arithmetic variable.
pub const SRAV: u32 = 0x07;
/// Jump register.
pub const JR: u32 = 0x08;
/// Jump and link register.
pub const JALR: u32 = 0x09;
/// Breakpoint: halts the processor.
pub const BREAK: u32 = 0x0D;
/// Add (aliases `ADDU`).
pub const ADD: u32 = 0x20;
/// Add unsigned.
pub const ADDU: u32 = 0x21;
/// Subtract (aliases `SUBU`).
pub const SUB: u32 = 0x22;
/// Subtract unsigned.
pub const SUBU: u32 = 0x23;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Bitwise XOR.
pub const XOR: u32 = 0x26;
/// Bitwise NOR.
pub const NOR: u32 = 0x27;
/// Set on less than.
pub const SLT: u32 = 0x2A;
/// Set on less than unsigned.
pub const SLTU: u32 = 0x2B;

/// REGIMM: branch on less than zero.
pub const BLTZ: u32 = 0x00;
/// REGIMM: branch on greater than or equal to zero.
pub const BGEZ: u32 = 0x01;
/// REGIMM: branch on less than zero and link.
pub const BLTZAL: u32 = 0x10;
/// REGIMM: branch on greater than or equal to zero and link.
pub const BGEZAL: u32 = 0x11;

/// COP0: move from coprocessor 0.
pub const MFC0: u32 = 0x00;
/// COP0: move to coprocessor 0.
pub const MTC0: u32 = 0x04;
