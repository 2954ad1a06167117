//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the signal processor model. It provides:
//! 1. **Cycles:** Clocks advanced and clocks requested while halted.
//! 2. **Instruction mix:** Executed instructions, loads, stores, taken branches.
//! 3. **Diagnostics:** Count of invalid encodings that reached Execute.

use std::time::Instant;

/// Simulation statistics structure.
///
/// Counters are updated by the clock driver and the execute dispatch. None
/// of them feed back into pipeline behavior.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Clocks in which the pipeline advanced.
    pub cycles: u64,
    /// Clock requests ignored because the processor was halted.
    pub halted_cycles: u64,
    /// Non-zero instruction words dispatched by Execute.
    pub instructions_executed: u64,
    /// Loads executed.
    pub loads: u64,
    /// Stores executed.
    pub stores: u64,
    /// Taken branches and jumps.
    pub branches_taken: u64,
    /// Invalid or vector-unit encodings executed as no-ops.
    pub invalid_opcodes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            halted_cycles: 0,
            instructions_executed: 0,
            loads: 0,
            stores: 0,
            branches_taken: 0,
            invalid_opcodes: 0,
        }
    }
}

impl SimStats {
    /// Instructions per advanced cycle; `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_executed as f64 / self.cycles as f64
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_executed.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        println!("\n==========================================================");
        println!("SIGNAL PROCESSOR SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_halted_cycles        {}", self.halted_cycles);
        println!("sim_insts                {}", self.instructions_executed);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.load                {} ({:.2}%)",
            self.loads,
            pct(self.loads)
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.stores,
            pct(self.stores)
        );
        println!(
            "  op.branch_taken        {} ({:.2}%)",
            self.branches_taken,
            pct(self.branches_taken)
        );
        println!(
            "  op.invalid             {} ({:.2}%)",
            self.invalid_opcodes,
            pct(self.invalid_opcodes)
        );
        println!("==========================================================");
    }
}
