//! # ALU Tests
//!
//! All operations work on 32-bit values and wrap without trapping.

use rspsim_core::core::pipeline::signals::AluOp;
use rspsim_core::core::units::alu::Alu;
use rstest::rstest;

#[rstest]
#[case::add(AluOp::Add, 5, 7, 12)]
#[case::add_wraps(AluOp::Add, 0xFFFF_FFFF, 2, 1)]
#[case::add_signed_overflow(AluOp::Add, 0x7FFF_FFFF, 1, 0x8000_0000)]
#[case::sub(AluOp::Sub, 7, 5, 2)]
#[case::sub_wraps(AluOp::Sub, 0, 1, 0xFFFF_FFFF)]
#[case::and(AluOp::And, 0xF0F0, 0xFF00, 0xF000)]
#[case::or(AluOp::Or, 0xF0F0, 0x0F0F, 0xFFFF)]
#[case::xor(AluOp::Xor, 0xFFFF, 0x0FF0, 0xF00F)]
#[case::nor(AluOp::Nor, 0, 0, 0xFFFF_FFFF)]
#[case::slt_negative(AluOp::Slt, (-1_i32) as u32, 0, 1)]
#[case::slt_false(AluOp::Slt, 3, 2, 0)]
#[case::sltu_negative_is_large(AluOp::Sltu, (-1_i32) as u32, 0, 0)]
#[case::sltu_true(AluOp::Sltu, 2, 3, 1)]
#[case::lui(AluOp::Lui, 0xDEAD, 0x1234, 0x1234_0000)]
fn test_alu(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case::sll(AluOp::Sll, 0x0000_0001, 31, 0x8000_0000)]
#[case::srl(AluOp::Srl, 0x8000_0000, 31, 1)]
#[case::sra_sign_fills(AluOp::Sra, 0x8000_0000, 4, 0xF800_0000)]
#[case::sra_positive(AluOp::Sra, 0x4000_0000, 4, 0x0400_0000)]
#[case::amount_masked_to_five_bits(AluOp::Sll, 1, 33, 2)]
#[case::zero_shift(AluOp::Srl, 0x1234, 0, 0x1234)]
fn test_shifts(#[case] op: AluOp, #[case] a: u32, #[case] sh: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, sh), expected);
}
