//! # General-Purpose Register Tests

use proptest::prelude::*;
use rspsim_core::common::constants::NUM_GPRS;
use rspsim_core::core::arch::gpr::Gpr;

#[test]
fn test_new_register_file_is_zero() {
    let regs = Gpr::new();
    assert!(regs.as_array().iter().all(|&r| r == 0));
}

#[test]
fn test_write_then_read() {
    let mut regs = Gpr::new();
    regs.write(5, 0xDEAD_BEEF);
    assert_eq!(regs.read(5), 0xDEAD_BEEF);
    assert_eq!(regs.read(4), 0);
}

#[test]
fn test_clear() {
    let mut regs = Gpr::new();
    for i in 1..NUM_GPRS {
        regs.write(i, i as u64);
    }
    regs.clear();
    assert_eq!(regs, Gpr::new());
}

#[test]
fn test_display_prints_pairs() {
    let mut regs = Gpr::new();
    regs.write(1, 0x1234);
    let text = regs.to_string();
    assert_eq!(text.lines().count(), NUM_GPRS / 2);
    assert!(text.starts_with("$0 =0x00000000 $1 =0x00001234"));
}

proptest! {
    #[test]
    fn prop_zero_register_discards_writes(val in any::<u64>()) {
        let mut regs = Gpr::new();
        regs.write(0, val);
        prop_assert_eq!(regs.read(0), 0);
    }

    #[test]
    fn prop_other_registers_keep_writes(idx in 1usize..NUM_GPRS, val in any::<u64>()) {
        let mut regs = Gpr::new();
        regs.write(idx, val);
        prop_assert_eq!(regs.read(idx), val);
        prop_assert_eq!(regs.read(0), 0);
    }
}
