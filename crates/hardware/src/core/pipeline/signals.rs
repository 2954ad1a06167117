//! Pipeline control signals and operation types.
//!
//! This module defines the signals the execute dispatch hands to the
//! functional units. It performs:
//! 1. **Operation Classification:** Selects the ALU operation.
//! 2. **Memory Control:** Specifies access widths and sign extension.
//! 3. **Branch Control:** Names the comparison a branch resolves.

/// ALU operation types for the scalar unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Default value.
    #[default]
    Add,
    /// Subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOR.
    Nor,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Load upper immediate (`b << 16`).
    Lui,
}

/// Width of a DMEM access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    #[default]
    Word,
}

impl MemWidth {
    /// Access size in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Condition evaluated by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `rs == rt`.
    Eq,
    /// `rs != rt`.
    Ne,
    /// `rs < 0`.
    Ltz,
    /// `rs >= 0`.
    Gez,
    /// `rs <= 0`.
    Lez,
    /// `rs > 0`.
    Gtz,
}
