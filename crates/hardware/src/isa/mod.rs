//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the scalar unit's encodings, the opcode space, the total decoder
//! and the disassembler used for instruction tracing.
//!
//! # Structure
//!
//! * `su`: Scalar unit opcode and function-code tables.
//! * `opcode`: Closed opcode identifier set and static attributes.
//! * `decode`: Instruction word to opcode descriptor.
//! * `disasm`: Instruction word to assembler text.

/// Instruction decoding from raw words to opcode descriptors.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Opcode identifiers and descriptors.
pub mod opcode;

/// Scalar unit instruction encodings.
pub mod su;

pub use decode::decode;
pub use instruction::InstructionBits;
pub use opcode::{Opcode, OpcodeAttrs, OpcodeInfo};
