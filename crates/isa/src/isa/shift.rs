//! Shift types for shifted-register operands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::SHIFT_TYPE_MASK;

/// The 2-bit shift applied to an R-type second operand (bits 32-33).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShiftType {
    /// Logical shift left.
    #[default]
    Lsl = 0,
    /// Logical shift right.
    Lsr = 1,
    /// Arithmetic shift right.
    Asr = 2,
    /// Rotate right.
    Ror = 3,
}

impl ShiftType {
    /// Maps the low two bits of `bits` to a shift type.
    ///
    /// Every 2-bit value is defined, so this cannot fail.
    pub const fn from_bits(bits: u8) -> Self {
        match bits as u64 & SHIFT_TYPE_MASK {
            0 => Self::Lsl,
            1 => Self::Lsr,
            2 => Self::Asr,
            _ => Self::Ror,
        }
    }

    /// Returns the 2-bit encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Asr => "ASR",
            Self::Ror => "ROR",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
