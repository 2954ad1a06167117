//! Instruction encoding and field extraction utilities.
//!
//! The scalar unit uses the classic MIPS field layout. Provides bit
//! extraction functions for every field the pipeline and the execute
//! dispatch need from a 32-bit instruction word.

/// Bit shift of the primary opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the primary opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift of the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift of the shift-amount field (bits 6-10).
pub const SA_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift-amount field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the function field of SPECIAL instructions (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all scalar instruction fields from a
/// 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the primary opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field `rs` (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source register field `rt` (bits 16-20).
    ///
    /// Immediate-format instructions use `rt` as their destination.
    fn rt(&self) -> usize;

    /// Extracts the destination register field `rd` (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn sa(&self) -> u32;

    /// Extracts the SPECIAL function code (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate.
    fn imm(&self) -> u32;

    /// Extracts the 16-bit immediate sign-extended to 32 bits.
    fn simm(&self) -> u32;

    /// Extracts the 26-bit jump target field.
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn sa(&self) -> u32 {
        (self >> SA_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u32 {
        self & IMM_MASK
    }

    /// Reinterprets the low half-word as `i16` and widens it, which
    /// replicates bit 15 into the upper half.
    #[inline(always)]
    fn simm(&self) -> u32 {
        (*self as u16 as i16) as i32 as u32
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}
