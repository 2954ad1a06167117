//! # Pipeline Tests
//!
//! Stage-level checks drive one stage at a time against hand-built latches;
//! the scenario tests run complete programs through the clock.


/// Cycle-accurate program scenarios.
pub mod scenarios;
