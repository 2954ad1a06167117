//! Simulation utilities and image loading.
//!
//! Provides utilities for placing microcode and data images into local
//! memory before the processor is released from halt.

pub mod loader;
