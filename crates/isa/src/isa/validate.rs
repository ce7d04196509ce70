//! Checked encoding.
//!
//! The builders in [`encode`](crate::isa::encode) wrap oversized operands
//! without complaint. This module is the layer above them that producers use
//! when a silent wrap would be a bug: it reports operands wider than their
//! field, opcodes with no defined operation, and raw opcodes paired with
//! another format's operands.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::bits::{fits_width, truncate_to_width};
use crate::common::constants::{
    BRANCH_OFFSET_WIDTH, EXTENDED_SHIFT, IMMEDIATE_WIDTH, MEMORY_OFFSET_WIDTH, MODE_SHIFT,
    MODE_WIDTH, OPCODE_SHIFT, OPCODE_WIDTH, RD_SHIFT, REG_WIDTH, RM_SHIFT, RN_SHIFT,
    SHIFT_AMOUNT_SHIFT, SHIFT_AMOUNT_WIDTH, SHIFT_TYPE_SHIFT, SHIFT_TYPE_WIDTH,
};
use crate::common::error::{IsaError, IsaResult};
use crate::config::{CodecConfig, OperandPolicy};
use crate::isa::addressing::MemoryMode;
use crate::isa::encode::{build_b, build_i, build_m_with_mode, build_r_shifted};
use crate::isa::format::{Format, format_tag_of};
use crate::isa::opcodes::{BOp, IOp, MOp, Opcode, ROp};
use crate::isa::shift::ShiftType;
use crate::isa::typed::Instruction;

/// A named field of the instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Opcode, bits 52-63.
    Opcode,
    /// Destination register, bits 47-51.
    Rd,
    /// First source register, bits 42-46.
    Rn,
    /// Second source register, bits 37-41.
    Rm,
    /// Addressing mode, bits 34-36.
    Mode,
    /// Shift type, bits 32-33.
    ShiftType,
    /// Shift amount, bits 26-31.
    ShiftAmount,
    /// I-type immediate, bits 0-33.
    Immediate,
    /// B-type offset, bits 0-47.
    BranchOffset,
    /// M-type offset, bits 0-31.
    MemoryOffset,
}

impl Field {
    /// Returns the field width in bits.
    pub const fn width(self) -> u32 {
        match self {
            Self::Opcode => OPCODE_WIDTH,
            Self::Rd | Self::Rn | Self::Rm => REG_WIDTH,
            Self::Mode => MODE_WIDTH,
            Self::ShiftType => SHIFT_TYPE_WIDTH,
            Self::ShiftAmount => SHIFT_AMOUNT_WIDTH,
            Self::Immediate => IMMEDIATE_WIDTH,
            Self::BranchOffset => BRANCH_OFFSET_WIDTH,
            Self::MemoryOffset => MEMORY_OFFSET_WIDTH,
        }
    }

    /// Returns the bit position of the field's least-significant bit.
    pub const fn shift(self) -> u32 {
        match self {
            Self::Opcode => OPCODE_SHIFT,
            Self::Rd => RD_SHIFT,
            Self::Rn => RN_SHIFT,
            Self::Rm => RM_SHIFT,
            Self::Mode => MODE_SHIFT,
            Self::ShiftType => SHIFT_TYPE_SHIFT,
            Self::ShiftAmount => SHIFT_AMOUNT_SHIFT,
            Self::Immediate | Self::BranchOffset | Self::MemoryOffset => EXTENDED_SHIFT,
        }
    }

    /// Returns the field's name as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opcode => "opcode",
            Self::Rd => "rd",
            Self::Rn => "rn",
            Self::Rm => "rm",
            Self::Mode => "mode",
            Self::ShiftType => "shift_type",
            Self::ShiftAmount => "shift_amount",
            Self::Immediate => "immediate",
            Self::BranchOffset => "branch_offset",
            Self::MemoryOffset => "memory_offset",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that `value` fits in `field` without truncation.
///
/// # Errors
///
/// [`IsaError::OperandOutOfRange`] if `value >= 2^width`.
pub const fn check_operand(field: Field, value: u64) -> IsaResult<u64> {
    let width = field.width();
    if fits_width(value, width) {
        Ok(value)
    } else {
        Err(IsaError::OperandOutOfRange {
            field,
            value,
            width,
        })
    }
}

/// Checks that a raw opcode carries the `expected` format tag.
///
/// # Errors
///
/// [`IsaError::FormatMismatch`] if the tag selects another format.
pub const fn check_format(opcode: u16, expected: Format) -> IsaResult<Format> {
    let actual = format_tag_of(opcode);
    if actual as u8 == expected as u8 {
        Ok(actual)
    } else {
        Err(IsaError::FormatMismatch {
            opcode,
            expected,
            actual,
        })
    }
}

/// Untyped operands for producers that hold raw opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operands {
    /// Register-format operands.
    R {
        /// Destination register index.
        rd: u64,
        /// First source register index.
        rn: u64,
        /// Second source register index.
        rm: u64,
    },
    /// Immediate-format operands.
    I {
        /// Destination register index.
        rd: u64,
        /// Source register index.
        rn: u64,
        /// Immediate.
        imm: u64,
    },
    /// Branch-format operands.
    B {
        /// Word-relative offset.
        offset: u64,
    },
    /// Memory-format operands.
    M {
        /// Data register index.
        rd: u64,
        /// Base register index.
        rn: u64,
        /// Offset.
        offset: u64,
    },
}

impl Operands {
    /// Returns the format these operands belong to.
    pub const fn format(&self) -> Format {
        match self {
            Self::R { .. } => Format::R,
            Self::I { .. } => Format::I,
            Self::B { .. } => Format::B,
            Self::M { .. } => Format::M,
        }
    }
}

/// Builders that enforce an [`OperandPolicy`] before packing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Encoder {
    policy: OperandPolicy,
}

impl Encoder {
    /// Creates an encoder with the given policy.
    pub const fn new(policy: OperandPolicy) -> Self {
        Self { policy }
    }

    /// Creates an encoder that rejects oversized operands.
    pub const fn strict() -> Self {
        Self::new(OperandPolicy::Reject)
    }

    /// Creates an encoder from a codec configuration.
    pub const fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.operand_policy)
    }

    /// Returns the active policy.
    pub const fn policy(&self) -> OperandPolicy {
        self.policy
    }

    /// Applies the policy to one operand.
    fn admit(&self, field: Field, value: u64) -> IsaResult<u64> {
        match self.policy {
            OperandPolicy::Reject => check_operand(field, value).inspect_err(|_| {
                warn!(%field, value, width = field.width(), "rejecting operand");
            }),
            OperandPolicy::Truncate => {
                let width = field.width();
                let kept = truncate_to_width(value, width);
                if kept != value {
                    debug!(%field, value, kept, width, "truncating operand");
                }
                Ok(kept)
            }
        }
    }

    /// Admits a register index and narrows it to `u8`.
    fn register(&self, field: Field, value: u64) -> IsaResult<u8> {
        self.admit(field, value).map(|v| v as u8)
    }

    /// Builds an R-type word.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn r(&self, op: ROp, rd: u64, rn: u64, rm: u64) -> IsaResult<u64> {
        self.r_shifted(op, rd, rn, rm, ShiftType::Lsl, 0)
    }

    /// Builds an R-type word with a shifted second operand.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn r_shifted(
        &self,
        op: ROp,
        rd: u64,
        rn: u64,
        rm: u64,
        shift: ShiftType,
        amount: u64,
    ) -> IsaResult<u64> {
        let rd = self.register(Field::Rd, rd)?;
        let rn = self.register(Field::Rn, rn)?;
        let rm = self.register(Field::Rm, rm)?;
        let amount = self.admit(Field::ShiftAmount, amount)? as u8;
        Ok(build_r_shifted(op, rd, rn, rm, shift, amount))
    }

    /// Builds an I-type word.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn i(&self, op: IOp, rd: u64, rn: u64, imm: u64) -> IsaResult<u64> {
        let rd = self.register(Field::Rd, rd)?;
        let rn = self.register(Field::Rn, rn)?;
        let imm = self.admit(Field::Immediate, imm)?;
        Ok(build_i(op, rd, rn, imm))
    }

    /// Builds a B-type word.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn b(&self, op: BOp, offset: u64) -> IsaResult<u64> {
        let offset = self.admit(Field::BranchOffset, offset)?;
        Ok(build_b(op, offset))
    }

    /// Builds an M-type word.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn m(&self, op: MOp, rd: u64, rn: u64, mode: MemoryMode, offset: u64) -> IsaResult<u64> {
        let rd = self.register(Field::Rd, rd)?;
        let rn = self.register(Field::Rn, rn)?;
        let offset = self.admit(Field::MemoryOffset, offset)?;
        Ok(build_m_with_mode(op, rd, rn, mode, offset))
    }

    /// Encodes a typed instruction, checking its wide operands.
    ///
    /// Register fields of an [`Instruction`] are always in range; the shift
    /// amount, immediate and offsets are checked against the policy.
    ///
    /// # Errors
    ///
    /// [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn encode(&self, inst: &Instruction) -> IsaResult<u64> {
        match *inst {
            Instruction::R {
                op,
                rd,
                rn,
                rm,
                shift,
                amount,
            } => self.r_shifted(
                op,
                rd.bits() as u64,
                rn.bits() as u64,
                rm.bits() as u64,
                shift,
                amount as u64,
            ),
            Instruction::I { op, rd, rn, imm } => {
                self.i(op, rd.bits() as u64, rn.bits() as u64, imm)
            }
            Instruction::B { op, offset } => self.b(op, offset),
            Instruction::M {
                op,
                rd,
                rn,
                mode,
                offset,
            } => self.m(op, rd.bits() as u64, rn.bits() as u64, mode, offset),
        }
    }

    /// Encodes a raw opcode with untyped operands.
    ///
    /// # Errors
    ///
    /// * [`IsaError::FormatMismatch`] if the opcode's tag disagrees with the operands.
    /// * [`IsaError::UnknownOpcode`] if the opcode names no operation.
    /// * [`IsaError::OperandOutOfRange`] under [`OperandPolicy::Reject`].
    pub fn encode_raw(&self, opcode: u16, operands: Operands) -> IsaResult<u64> {
        let _ = check_format(opcode, operands.format())?;
        let op = Opcode::try_from(opcode)?;

        match (op, operands) {
            (Opcode::R(op), Operands::R { rd, rn, rm }) => self.r(op, rd, rn, rm),
            (Opcode::I(op), Operands::I { rd, rn, imm }) => self.i(op, rd, rn, imm),
            (Opcode::B(op), Operands::B { offset }) => self.b(op, offset),
            (Opcode::M(op), Operands::M { rd, rn, offset }) => {
                self.m(op, rd, rn, MemoryMode::Offset, offset)
            }
            (op, operands) => Err(IsaError::FormatMismatch {
                opcode,
                expected: operands.format(),
                actual: op.format(),
            }),
        }
    }
}
