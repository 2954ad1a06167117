//! Common types and constants shared throughout the signal processor model.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Constants:** Memory layout, fetch window and register file dimensions.
//! 2. **Error Handling:** Host-side errors for image loading and configuration.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for host-side operations.
pub mod error;

pub use constants::{DMEM_ADDR_MASK, IMEM_BASE, NUM_GPRS, PC_MASK, REG_ZERO, SP_MEM_SIZE};
pub use error::{ConfigError, LoadError, Region};
