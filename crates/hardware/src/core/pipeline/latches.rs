//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch holds the state of exactly one in-flight instruction between
//! two adjacent stages. Every latch is overwritten once per clock by the
//! stage that produces it. The [`Common`] record rides along unchanged
//! from Fetch to Writeback so any stage can report which instruction it holds.

use crate::isa::decode::decode;
use crate::isa::opcode::OpcodeInfo;

/// Metadata carried by every latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Common {
    /// IMEM offset the instruction was fetched from.
    pub pc: u32,
}

/// IF/RD latch (Instruction-Fetch to Register-Fetch).
///
/// Besides the fetched instruction it holds the fetch counter itself: `pc`
/// is the address the *next* fetch will read. Taken branches overwrite it
/// during Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfRdLatch {
    /// Identity of the instruction held in this latch.
    pub common: Common,
    /// Next fetch address, already advanced and masked into IMEM.
    pub pc: u32,
    /// Fetched instruction word, host byte order.
    pub iw: u32,
}

/// RD/EX latch (Register-Fetch/Decode to Execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RdExLatch {
    /// Identity of the instruction held in this latch.
    pub common: Common,
    /// Decoded opcode descriptor.
    pub opcode: OpcodeInfo,
    /// Raw instruction word, kept for operand and immediate extraction.
    pub iw: u32,
}

impl Default for RdExLatch {
    /// The zero state holds the decoding of the all-zero word (a no-op).
    fn default() -> Self {
        Self {
            common: Common::default(),
            opcode: decode(0),
            iw: 0,
        }
    }
}

/// EX/DF latch (Execute to Data-Fetch).
///
/// A destination of `$0` makes the eventual writeback a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExDfLatch {
    /// Identity of the instruction held in this latch.
    pub common: Common,
    /// Result value.
    pub result: u64,
    /// Destination register index.
    pub dest: usize,
}

/// DF/WB latch (Data-Fetch to Writeback).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DfWbLatch {
    /// Identity of the instruction held in this latch.
    pub common: Common,
    /// Result value.
    pub result: u64,
    /// Destination register index.
    pub dest: usize,
}

/// The full latch set owned by the processor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// IF/RD latch.
    pub ifrd: IfRdLatch,
    /// RD/EX latch.
    pub rdex: RdExLatch,
    /// EX/DF latch.
    pub exdf: ExDfLatch,
    /// DF/WB latch.
    pub dfwb: DfWbLatch,
}

impl Pipeline {
    /// Returns a latch set in its zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every latch to its zero state.
    ///
    /// This also rewinds the fetch counter to IMEM offset 0.
    pub fn init(&mut self) {
        *self = Self::default();
    }
}
