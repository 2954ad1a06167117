//! Signal Processor Core Definition and Initialization.
//!
//! This module defines the central `Rsp` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the scalar register file and coprocessor-0 registers.
//! 2. **Pipeline Control:** Owns the four inter-stage latches, including the fetch counter.
//! 3. **Local Memory:** Holds the 8 KiB DMEM/IMEM store the pipeline fetches from and accesses.
//! 4. **Observability:** Tracks statistics and gates instruction tracing.

/// Clock driver and reset.
pub mod execution;

/// Per-opcode execute handlers.
pub mod handlers;

use crate::common::constants::PC_MASK;
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::arch::cp0::{CLR_HALT, Cp0, SET_HALT};
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::Pipeline;
use crate::sim::loader;
use crate::soc::memory::SpMemory;
use crate::stats::SimStats;

/// Main processor structure containing all state.
///
/// Stages receive `&mut Rsp` and reach the parts they need through its
/// public fields; there is no other shared state.
#[derive(Clone, Debug)]
pub struct Rsp {
    /// Scalar general-purpose registers.
    pub regs: Gpr,
    /// Coprocessor-0 status and control registers.
    pub cp0: Cp0,
    /// Inter-stage latches.
    pub pipeline: Pipeline,
    /// Local DMEM + IMEM.
    pub mem: SpMemory,
    /// Performance statistics.
    pub stats: SimStats,
    /// Enable instruction tracing.
    pub trace: bool,
}

impl Rsp {
    /// Creates a processor from `config` with zeroed memory.
    ///
    /// Images named in `config.memory` are not loaded; use
    /// [`Rsp::from_config`] for that.
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    pub fn new(config: &Config) -> Self {
        let mut cp0 = Cp0::new();
        cp0.write_status(if config.general.start_halted {
            SET_HALT
        } else {
            CLR_HALT
        });

        let mut pipeline = Pipeline::new();
        pipeline.ifrd.pc = config.general.start_pc & PC_MASK;

        Self {
            regs: Gpr::new(),
            cp0,
            pipeline,
            mem: SpMemory::new(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
        }
    }

    /// Creates a processor and loads the images named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if an image cannot be read or does not
    /// fit in its region.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut rsp = Self::new(config);
        loader::load_configured(&mut rsp.mem, &config.memory)?;
        Ok(rsp)
    }

    /// Tests SP_STATUS.HALT.
    #[inline]
    pub const fn halted(&self) -> bool {
        self.cp0.halted()
    }

    /// Applies a host write to SP_STATUS (set/clear command bits).
    pub fn write_status(&mut self, mask: u32) {
        self.cp0.write_status(mask);
    }

    /// Dumps the fetch counter and registers to stdout.
    pub fn dump_state(&self) {
        println!(
            "PC = {:#05x}  STATUS = {:#06x}",
            self.pipeline.ifrd.pc,
            self.cp0.status()
        );
        println!("{}", self.regs);
    }
}
