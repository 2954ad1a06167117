//! Opcode identifiers and static opcode attributes.
//!
//! The scalar opcode space is a closed set: every instruction word decodes to
//! exactly one [`Opcode`], and encodings the scalar unit does not implement
//! (vector-unit instructions, reserved slots) land on [`Opcode::Invalid`]
//! instead of a sentinel handler.

/// Operation identifier of a decoded scalar instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Reserved, unimplemented or vector-unit encoding. Executes as a no-op.
    #[default]
    Invalid,

    /// Add immediate (also the decoding of `ADDI`).
    Addiu,
    /// Add (also the decoding of `ADD`).
    Addu,
    /// Bitwise AND.
    And,
    /// AND immediate.
    Andi,
    /// Branch on equal.
    Beq,
    /// Branch on greater than or equal to zero.
    Bgez,
    /// Branch on greater than or equal to zero and link.
    Bgezal,
    /// Branch on greater than zero.
    Bgtz,
    /// Branch on less than or equal to zero.
    Blez,
    /// Branch on less than zero.
    Bltz,
    /// Branch on less than zero and link.
    Bltzal,
    /// Branch on not equal.
    Bne,
    /// Breakpoint: halts the processor.
    Break,
    /// Jump.
    J,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Jump register.
    Jr,
    /// Load byte (sign-extended).
    Lb,
    /// Load byte unsigned.
    Lbu,
    /// Load halfword (sign-extended).
    Lh,
    /// Load halfword unsigned.
    Lhu,
    /// Load upper immediate.
    Lui,
    /// Load word.
    Lw,
    /// Move from coprocessor 0.
    Mfc0,
    /// Move to coprocessor 0.
    Mtc0,
    /// Bitwise NOR.
    Nor,
    /// Bitwise OR.
    Or,
    /// OR immediate.
    Ori,
    /// Store byte.
    Sb,
    /// Store halfword.
    Sh,
    /// Shift left logical.
    Sll,
    /// Shift left logical variable.
    Sllv,
    /// Set on less than.
    Slt,
    /// Set on less than immediate.
    Slti,
    /// Set on less than immediate unsigned.
    Sltiu,
    /// Set on less than unsigned.
    Sltu,
    /// Shift right arithmetic.
    Sra,
    /// Shift right arithmetic variable.
    Srav,
    /// Shift right logical.
    Srl,
    /// Shift right logical variable.
    Srlv,
    /// Subtract (also the decoding of `SUB`).
    Subu,
    /// Store word.
    Sw,
    /// Bitwise XOR.
    Xor,
    /// XOR immediate.
    Xori,
}

impl Opcode {
    /// Lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Addiu => "addiu",
            Self::Addu => "addu",
            Self::And => "and",
            Self::Andi => "andi",
            Self::Beq => "beq",
            Self::Bgez => "bgez",
            Self::Bgezal => "bgezal",
            Self::Bgtz => "bgtz",
            Self::Blez => "blez",
            Self::Bltz => "bltz",
            Self::Bltzal => "bltzal",
            Self::Bne => "bne",
            Self::Break => "break",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
            Self::Jr => "jr",
            Self::Lb => "lb",
            Self::Lbu => "lbu",
            Self::Lh => "lh",
            Self::Lhu => "lhu",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Mfc0 => "mfc0",
            Self::Mtc0 => "mtc0",
            Self::Nor => "nor",
            Self::Or => "or",
            Self::Ori => "ori",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sll => "sll",
            Self::Sllv => "sllv",
            Self::Slt => "slt",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Sltu => "sltu",
            Self::Sra => "sra",
            Self::Srav => "srav",
            Self::Srl => "srl",
            Self::Srlv => "srlv",
            Self::Subu => "subu",
            Self::Sw => "sw",
            Self::Xor => "xor",
            Self::Xori => "xori",
        }
    }
}

/// Static attributes of an opcode, fixed at decode time.
///
/// Mirrors the control signals a hardware decoder would drive. The execute
/// dispatch does not depend on them; they feed statistics and tracing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpcodeAttrs {
    /// Instruction consumes the `rs` operand.
    pub reads_rs: bool,
    /// Instruction consumes the `rt` operand.
    pub reads_rt: bool,
    /// Instruction produces a register result.
    pub writes_reg: bool,
    /// Instruction reads DMEM.
    pub load: bool,
    /// Instruction writes DMEM.
    pub store: bool,
    /// Instruction may redirect the fetch stream.
    pub branch: bool,
}

impl OpcodeAttrs {
    const NONE: Self = Self {
        reads_rs: false,
        reads_rt: false,
        writes_reg: false,
        load: false,
        store: false,
        branch: false,
    };

    /// Register-register ALU operation (`rd <- rs op rt`).
    const RR: Self = Self {
        reads_rs: true,
        reads_rt: true,
        writes_reg: true,
        ..Self::NONE
    };

    /// Register-immediate ALU operation (`rt <- rs op imm`).
    const RI: Self = Self {
        reads_rs: true,
        writes_reg: true,
        ..Self::NONE
    };

    /// Constant shift (`rd <- rt op sa`).
    const SHIFT: Self = Self {
        reads_rt: true,
        writes_reg: true,
        ..Self::NONE
    };

    const LOAD: Self = Self {
        reads_rs: true,
        writes_reg: true,
        load: true,
        ..Self::NONE
    };

    const STORE: Self = Self {
        reads_rs: true,
        reads_rt: true,
        store: true,
        ..Self::NONE
    };

    const fn branch(reads_rs: bool, reads_rt: bool, links: bool) -> Self {
        Self {
            reads_rs,
            reads_rt,
            writes_reg: links,
            branch: true,
            ..Self::NONE
        }
    }

    /// Returns the static attributes of `op`.
    pub const fn of(op: Opcode) -> Self {
        match op {
            Opcode::Invalid | Opcode::Break => Self::NONE,
            Opcode::Addu
            | Opcode::And
            | Opcode::Nor
            | Opcode::Or
            | Opcode::Sllv
            | Opcode::Slt
            | Opcode::Sltu
            | Opcode::Srav
            | Opcode::Srlv
            | Opcode::Subu
            | Opcode::Xor => Self::RR,
            Opcode::Addiu
            | Opcode::Andi
            | Opcode::Ori
            | Opcode::Slti
            | Opcode::Sltiu
            | Opcode::Xori => Self::RI,
            Opcode::Lui => Self {
                writes_reg: true,
                ..Self::NONE
            },
            Opcode::Sll | Opcode::Sra | Opcode::Srl => Self::SHIFT,
            Opcode::Lb | Opcode::Lbu | Opcode::Lh | Opcode::Lhu | Opcode::Lw => Self::LOAD,
            Opcode::Sb | Opcode::Sh | Opcode::Sw => Self::STORE,
            Opcode::Beq | Opcode::Bne => Self::branch(true, true, false),
            Opcode::Bgez | Opcode::Bgtz | Opcode::Blez | Opcode::Bltz => {
                Self::branch(true, false, false)
            }
            Opcode::Bgezal | Opcode::Bltzal => Self::branch(true, false, true),
            Opcode::J => Self::branch(false, false, false),
            Opcode::Jal => Self::branch(false, false, true),
            Opcode::Jr => Self::branch(true, false, false),
            Opcode::Jalr => Self::branch(true, false, true),
            Opcode::Mfc0 => Self {
                writes_reg: true,
                ..Self::NONE
            },
            Opcode::Mtc0 => Self {
                reads_rt: true,
                ..Self::NONE
            },
        }
    }
}

/// Opcode descriptor produced by the decoder.
///
/// Carries the operation identity and its static attributes. The raw
/// instruction word travels separately in the Decode-output latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Operation identifier used to select the execute handler.
    pub id: Opcode,
    /// Static attributes of the operation.
    pub attrs: OpcodeAttrs,
}

impl OpcodeInfo {
    /// Builds the descriptor of `id`.
    pub const fn new(id: Opcode) -> Self {
        Self {
            id,
            attrs: OpcodeAttrs::of(id),
        }
    }
}
