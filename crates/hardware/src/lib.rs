//! Cycle-accurate signal processor scalar pipeline.
//!
//! This crate models the scalar unit of a vector coprocessor with the following:
//! 1. **Core:** Five-stage pipeline (fetch, register-fetch, execute, data-fetch, writeback),
//!    operand forwarding, and coprocessor-0 status control.
//! 2. **Memory:** An 8 KiB local store split into DMEM and IMEM.
//! 3. **ISA:** Decoding and disassembly of the scalar MIPS-style instruction set.
//! 4. **Simulation:** Image loading, configuration, and statistics collection.
//!
//! # Examples
//!
//! ```
//! use rspsim_core::Rsp;
//! use rspsim_core::config::Config;
//! use rspsim_core::core::arch::cp0::CLR_HALT;
//!
//! let mut rsp = Rsp::new(&Config::default());
//! rsp.regs.write(1, 5);
//! rsp.regs.write(2, 7);
//! // addu $3, $1, $2
//! rsp.mem.write_program(0, &[0x0022_1821]);
//! rsp.write_status(CLR_HALT);
//!
//! for _ in 0..5 {
//!     rsp.cycle();
//! }
//! assert_eq!(rsp.regs.read(3), 12);
//! ```

/// Common types, constants, and host-side errors.
pub mod common;
/// Simulator configuration (defaults and JSON structures).
pub mod config;
/// Processor core (pipeline, architectural state, units, clock driver).
pub mod core;
/// Instruction set (opcodes, decode, disassembly).
pub mod isa;
/// Image loading.
pub mod sim;
/// Local memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main processor type; holds registers, latches, memory, and stats.
pub use crate::core::Rsp;
