//! Typed instructions.
//!
//! [`Instruction`] pairs a defined operation with exactly the operands its
//! format carries. Encoding one is total; obtaining one from a raw word can
//! fail, because not every opcode names an operation and not every M-type mode
//! field names an addressing mode.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::common::error::IsaError;
use crate::isa::addressing::MemoryMode;
use crate::isa::decode::decode;
use crate::isa::encode::{build_b, build_i, build_m_with_mode, build_r_shifted};
use crate::isa::instruction::Decoded;
use crate::isa::opcodes::{BOp, IOp, MOp, Opcode, ROp};
use crate::isa::register::Register;
use crate::isa::shift::ShiftType;

/// A defined operation with its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Register format.
    R {
        /// Operation.
        op: ROp,
        /// Destination register.
        rd: Register,
        /// First source register.
        rn: Register,
        /// Second source register.
        rm: Register,
        /// Shift applied to `rm`.
        shift: ShiftType,
        /// Shift amount; only the low six bits are encoded.
        amount: u8,
    },
    /// Immediate format.
    I {
        /// Operation.
        op: IOp,
        /// Destination register.
        rd: Register,
        /// Source register.
        rn: Register,
        /// Immediate; only the low 34 bits are encoded.
        imm: u64,
    },
    /// Branch format.
    B {
        /// Operation.
        op: BOp,
        /// Word-relative offset; only the low 48 bits are encoded.
        offset: u64,
    },
    /// Memory format.
    M {
        /// Operation.
        op: MOp,
        /// Data register.
        rd: Register,
        /// Base register.
        rn: Register,
        /// Addressing mode.
        mode: MemoryMode,
        /// Offset; only the low 32 bits are encoded.
        offset: u64,
    },
}

impl Instruction {
    /// Convenience constructor for an unshifted R-type instruction.
    pub const fn r(op: ROp, rd: Register, rn: Register, rm: Register) -> Self {
        Self::R {
            op,
            rd,
            rn,
            rm,
            shift: ShiftType::Lsl,
            amount: 0,
        }
    }

    /// Convenience constructor for an I-type instruction.
    pub const fn i(op: IOp, rd: Register, rn: Register, imm: u64) -> Self {
        Self::I { op, rd, rn, imm }
    }

    /// Convenience constructor for a B-type instruction.
    pub const fn b(op: BOp, offset: u64) -> Self {
        Self::B { op, offset }
    }

    /// Convenience constructor for an M-type instruction with offset addressing.
    pub const fn m(op: MOp, rd: Register, rn: Register, offset: u64) -> Self {
        Self::M {
            op,
            rd,
            rn,
            mode: MemoryMode::Offset,
            offset,
        }
    }

    /// Returns the operation.
    pub const fn opcode(&self) -> Opcode {
        match *self {
            Self::R { op, .. } => Opcode::R(op),
            Self::I { op, .. } => Opcode::I(op),
            Self::B { op, .. } => Opcode::B(op),
            Self::M { op, .. } => Opcode::M(op),
        }
    }

    /// Packs the instruction into a word.
    pub const fn encode(&self) -> u64 {
        match *self {
            Self::R {
                op,
                rd,
                rn,
                rm,
                shift,
                amount,
            } => build_r_shifted(op, rd.bits(), rn.bits(), rm.bits(), shift, amount),
            Self::I { op, rd, rn, imm } => build_i(op, rd.bits(), rn.bits(), imm),
            Self::B { op, offset } => build_b(op, offset),
            Self::M {
                op,
                rd,
                rn,
                mode,
                offset,
            } => build_m_with_mode(op, rd.bits(), rn.bits(), mode, offset),
        }
    }

    /// Decodes a word and resolves its operation.
    ///
    /// # Errors
    ///
    /// [`IsaError::UnknownOpcode`] if the opcode names no operation, and
    /// [`IsaError::InvalidMemoryMode`] for an M-type word with mode 5-7.
    pub fn from_word(word: u64) -> Result<Self, IsaError> {
        Self::try_from(decode(word))
    }
}

impl TryFrom<Decoded> for Instruction {
    type Error = IsaError;

    fn try_from(decoded: Decoded) -> Result<Self, Self::Error> {
        let raw = decoded.opcode();
        let Some(opcode) = Opcode::from_raw(raw) else {
            trace!(opcode = raw, "no operation defined for opcode");
            return Err(IsaError::UnknownOpcode(raw));
        };

        // The tag selected both the payload and the operation enum, so the
        // pairs below always agree.
        match (opcode, decoded) {
            (Opcode::R(op), Decoded::R(f)) => Ok(Self::R {
                op,
                rd: f.rd,
                rn: f.rn,
                rm: f.rm,
                shift: f.shift_type,
                amount: f.shift_amount,
            }),
            (Opcode::I(op), Decoded::I(f)) => Ok(Self::I {
                op,
                rd: f.rd,
                rn: f.rn,
                imm: f.immediate,
            }),
            (Opcode::B(op), Decoded::B(f)) => Ok(Self::B {
                op,
                offset: f.offset,
            }),
            (Opcode::M(op), Decoded::M(f)) => Ok(Self::M {
                op,
                rd: f.rd,
                rn: f.rn,
                mode: MemoryMode::try_from(f.mode)?,
                offset: f.offset,
            }),
            (opcode, decoded) => Err(IsaError::FormatMismatch {
                opcode: raw,
                expected: decoded.format(),
                actual: opcode.format(),
            }),
        }
    }
}

impl TryFrom<u64> for Instruction {
    type Error = IsaError;

    fn try_from(word: u64) -> Result<Self, Self::Error> {
        Self::from_word(word)
    }
}

impl From<Instruction> for u64 {
    fn from(inst: Instruction) -> Self {
        inst.encode()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::isa::disasm::disassemble(self.encode()))
    }
}
