//! System-on-Chip (SoC) Components.
//!
//! The signal processor sees only its private local memory; DMA and the
//! host bus are outside this model.

/// Local DMEM/IMEM store.
pub mod memory;
