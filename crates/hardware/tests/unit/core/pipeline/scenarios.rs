//! # Pipeline Scenarios
//!
//! Whole programs driven through `Rsp::cycle`. An instruction fetched on
//! clock *T* executes on *T+2* and commits on *T+4*, so with a fresh
//! pipeline the instruction at IMEM index *i* is visible in the register
//! file after `i + 5` clocks.

use crate::common::builder::instruction::{InstructionBuilder, NOP, brk};
use crate::common::harness::TestContext;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rspsim_core::common::constants::PC_MASK;
use rspsim_core::core::arch::cp0::{CLR_HALT, SET_HALT, SP_STATUS, STATUS_BROKE};

fn ib() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[test]
fn test_add_commits_after_five_cycles() {
    let mut ctx = TestContext::new()
        .with_reg(1, 5)
        .with_reg(2, 7)
        .load_program(0, &[ib().addu(3, 1, 2).build()]);

    ctx.step(4);
    assert_eq!(ctx.get_reg(3), 0);

    ctx.step(1);
    assert_eq!(ctx.get_reg(3), 12);
}

#[test]
fn test_result_is_zero_extended_32_bit() {
    let mut ctx = TestContext::new()
        .with_reg(1, 0xFFFF_FFFF)
        .with_reg(2, 2)
        .load_program(0, &[ib().addu(3, 1, 2).build()]);
    ctx.step(5);
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn test_back_to_back_dependency_is_forwarded() {
    let mut ctx = TestContext::new()
        .with_reg(1, 5)
        .with_reg(2, 7)
        .load_program(0, &[ib().addu(4, 1, 2).build(), ib().addu(5, 4, 4).build()]);

    // The consumer executes on clock 4, when $4 is still uncommitted.
    ctx.step(4);
    assert_eq!(ctx.get_reg(4), 0);
    assert_eq!(ctx.rsp.pipeline.exdf.dest, 5);
    assert_eq!(ctx.rsp.pipeline.exdf.result, 24);

    ctx.step(1);
    assert_eq!(ctx.get_reg(4), 12);
    assert_eq!(ctx.get_reg(5), 0);

    ctx.step(1);
    assert_eq!(ctx.get_reg(5), 24);
}

#[test]
fn test_dependency_two_apart_reads_committed_value() {
    let mut ctx = TestContext::new().with_reg(1, 5).load_program(
        0,
        &[
            ib().addiu(3, 0, 12).build(),
            NOP,
            ib().addu(4, 3, 1).build(),
        ],
    );
    ctx.step(7);
    assert_eq!(ctx.get_reg(4), 17);
}

#[test]
fn test_dependency_chain() {
    let program: Vec<u32> = (0..8).map(|_| ib().addiu(1, 1, 1).build()).collect();
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.step(program.len() + 4);
    assert_eq!(ctx.get_reg(1), 8);
}

#[test]
fn test_load_result_is_forwarded_without_stall() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[ib().lw(5, 0, 0x10).build(), ib().addu(6, 5, 0).build()],
    );
    ctx.rsp.mem.write_u32(0x10, 0xDEAD_BEEF);

    ctx.step(6);
    assert_eq!(ctx.get_reg(5), 0xDEAD_BEEF);
    assert_eq!(ctx.get_reg(6), 0xDEAD_BEEF);
}

#[test]
fn test_store_then_load() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().addiu(1, 0, 0x1234).build(),
            ib().sw(1, 0, 8).build(),
            ib().lw(2, 0, 8).build(),
            ib().lb(3, 0, 11).build(),
        ],
    );
    ctx.step(8);

    assert_eq!(&ctx.rsp.mem.dmem()[8..12], &[0x00, 0x00, 0x12, 0x34]);
    assert_eq!(ctx.get_reg(2), 0x1234);
    assert_eq!(ctx.get_reg(3), 0x34);
}

#[test]
fn test_writes_to_zero_register_are_discarded() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[ib().addiu(0, 0, 5).build(), ib().addu(1, 0, 0).build()],
    );
    ctx.step(6);
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn test_taken_branch_has_one_delay_slot() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().beq(0, 0, 2).build(),     // 0x000 -> 0x00C
            ib().addiu(1, 0, 1).build(),   // 0x004 delay slot
            ib().addiu(2, 0, 2).build(),   // 0x008 skipped
            ib().addiu(3, 0, 3).build(),   // 0x00C
        ],
    );
    ctx.step(10);

    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 3);
    assert_eq!(ctx.rsp.stats.branches_taken, 1);
}

#[test]
fn test_untaken_branch_falls_through() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().bne(0, 0, 2).build(),
            ib().addiu(1, 0, 1).build(),
            ib().addiu(2, 0, 2).build(),
            ib().addiu(3, 0, 3).build(),
        ],
    );
    ctx.step(10);

    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.get_reg(3), 3);
    assert_eq!(ctx.rsp.stats.branches_taken, 0);
}

#[test]
fn test_jal_links_past_delay_slot() {
    let mut ctx = TestContext::new().load_program(0, &[ib().jal(0x010).build(), NOP]);
    ctx.rsp
        .mem
        .write_program(0x010, &[ib().addu(5, 31, 0).build()]);

    ctx.step(8);
    assert_eq!(ctx.get_reg(31), 0x008);
    assert_eq!(ctx.get_reg(5), 0x008);
}

#[test]
fn test_jr_uses_forwarded_target() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[ib().addiu(1, 0, 0x20).build(), ib().jr(1).build(), NOP],
    );
    ctx.rsp
        .mem
        .write_program(0x020, &[ib().addiu(2, 0, 7).build()]);

    ctx.step(10);
    assert_eq!(ctx.get_reg(2), 7);
}

#[test]
fn test_loop_counts_down() {
    // 0x000: addiu $1, $0, 3
    // 0x004: addiu $1, $1, -1
    // 0x008: bne   $1, $0, 0x004
    // 0x00C: addiu $2, $2, 1     (delay slot, runs every iteration)
    // 0x010: nop
    // 0x014: break
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().addiu(1, 0, 3).build(),
            ib().addiu(1, 1, -1).build(),
            ib().bne(1, 0, -2).build(),
            ib().addiu(2, 2, 1).build(),
            NOP,
            brk(),
        ],
    );

    let _ = ctx.run_until_halt(100);

    assert!(ctx.rsp.halted());
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 3);
    assert_eq!(ctx.rsp.stats.branches_taken, 2);
}

#[test]
fn test_break_halts_processor() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().addiu(1, 0, 1).build(),
            NOP,
            brk(),
            ib().addiu(2, 0, 2).build(),
        ],
    );

    assert_eq!(ctx.run_until_halt(100), 5);
    assert!(ctx.rsp.halted());
    assert_eq!(ctx.rsp.cp0.status() & STATUS_BROKE, STATUS_BROKE);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(2), 0);
}

#[test]
fn test_resume_after_break_continues_in_flight_work() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().addiu(1, 0, 1).build(),
            NOP,
            brk(),
            ib().addiu(2, 0, 2).build(),
        ],
    );
    let _ = ctx.run_until_halt(100);

    ctx.rsp.write_status(CLR_HALT);
    ctx.step(4);
    assert_eq!(ctx.get_reg(2), 2);
}

#[test]
fn test_mtc0_can_halt_processor() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[
            ib().addiu(1, 0, SET_HALT as i32).build(),
            ib().mtc0(1, SP_STATUS as u32).build(),
        ],
    );
    assert_eq!(ctx.run_until_halt(100), 4);
    assert!(ctx.rsp.halted());
    assert_eq!(ctx.rsp.cp0.status() & STATUS_BROKE, 0);
}

#[test]
fn test_mfc0_reads_semaphore() {
    let mut ctx = TestContext::new().load_program(
        0,
        &[ib().mfc0(1, 7).build(), ib().mfc0(2, 7).build()],
    );
    ctx.step(6);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 1);
}

#[test]
fn test_invalid_opcode_executes_as_nop() {
    let mut ctx = TestContext::new()
        .with_reg(1, 9)
        .load_program(0, &[0x4800_0000, ib().addu(2, 1, 0).build()]);
    let before = ctx.rsp.regs.clone();

    ctx.step(5);
    assert_eq!(ctx.rsp.regs, before);
    assert_eq!(ctx.rsp.stats.invalid_opcodes, 1);

    ctx.step(1);
    assert_eq!(ctx.get_reg(2), 9);
}

#[test]
fn test_program_wraps_through_end_of_imem() {
    let mut ctx = TestContext::new().load_program(
        0xFFC,
        &[ib().addiu(1, 0, 1).build(), ib().addiu(2, 0, 2).build()],
    );
    ctx.step(6);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.rsp.pipeline.ifrd.pc, 0x014);
}

proptest! {
    #[test]
    fn prop_latency_is_five_clocks(padding in 0usize..16, a in any::<u16>(), b in any::<u16>()) {
        let mut program = vec![NOP; padding];
        program.push(ib().addu(3, 1, 2).build());
        let mut ctx = TestContext::new()
            .with_reg(1, u64::from(a))
            .with_reg(2, u64::from(b))
            .load_program(0, &program);

        ctx.step(padding + 4);
        prop_assert_eq!(ctx.get_reg(3), 0);
        ctx.step(1);
        prop_assert_eq!(ctx.get_reg(3), u64::from(a) + u64::from(b));
    }

    #[test]
    fn prop_fetch_counter_wraps(start in 0u32..0x1000, n in 1usize..2048) {
        let mut ctx = TestContext::new().load_program(start, &[]);
        ctx.step(n);
        let expected = ((start & PC_MASK) + 4 * n as u32) & PC_MASK;
        prop_assert_eq!(ctx.rsp.pipeline.ifrd.pc, expected);
    }

    #[test]
    fn prop_halted_clock_changes_nothing(
        words in proptest::collection::vec(any::<u32>(), 1..32),
        warmup in 0usize..16,
        halted_clocks in 1usize..16,
    ) {
        let mut ctx = TestContext::new().load_program(0, &words);
        for i in 1..32 {
            ctx.set_reg(i, i as u64);
        }
        ctx.step(warmup);
        ctx.rsp.write_status(SET_HALT);

        let regs = ctx.rsp.regs.clone();
        let pipeline = ctx.rsp.pipeline;
        let mem = ctx.rsp.mem.clone();
        let cp0 = ctx.rsp.cp0.clone();

        ctx.step(halted_clocks);

        prop_assert_eq!(&ctx.rsp.regs, &regs);
        prop_assert_eq!(ctx.rsp.pipeline, pipeline);
        prop_assert_eq!(&ctx.rsp.mem, &mem);
        prop_assert_eq!(&ctx.rsp.cp0, &cp0);
    }

    #[test]
    fn prop_zero_register_stays_zero(words in proptest::collection::vec(any::<u32>(), 1..64)) {
        let mut ctx = TestContext::new().load_program(0, &words);
        for _ in 0..words.len() + 4 {
            ctx.rsp.cycle();
            prop_assert_eq!(ctx.get_reg(0), 0);
        }
    }
}
