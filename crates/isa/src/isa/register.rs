//! General-purpose register names.
//!
//! Defines the 32 architectural registers addressed by the 5-bit `rd`, `rn`
//! and `rm` fields, together with the calling-convention role of each.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::REG_MASK;

/// An architectural general-purpose register.
///
/// `X0` reads as zero and discards writes. That is an execution-side contract;
/// the codec packs index 0 like any other register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    /// Hardwired zero.
    X0 = 0,
    /// First return value.
    X1 = 1,
    /// Second return value.
    X2 = 2,
    /// First argument.
    X3 = 3,
    /// Second argument.
    X4 = 4,
    /// Third argument.
    X5 = 5,
    /// Fourth argument.
    X6 = 6,
    /// Fifth argument.
    X7 = 7,
    /// Sixth argument.
    X8 = 8,
    /// Temporary.
    X9 = 9,
    /// Temporary.
    X10 = 10,
    /// Temporary.
    X11 = 11,
    /// Temporary.
    X12 = 12,
    /// Temporary.
    X13 = 13,
    /// Temporary.
    X14 = 14,
    /// Temporary.
    X15 = 15,
    /// Intra-procedure scratch 0.
    X16 = 16,
    /// Intra-procedure scratch 1.
    X17 = 17,
    /// Platform register.
    X18 = 18,
    /// Callee-saved.
    X19 = 19,
    /// Callee-saved.
    X20 = 20,
    /// Callee-saved.
    X21 = 21,
    /// Callee-saved.
    X22 = 22,
    /// Callee-saved.
    X23 = 23,
    /// Callee-saved.
    X24 = 24,
    /// Callee-saved.
    X25 = 25,
    /// Callee-saved.
    X26 = 26,
    /// Callee-saved.
    X27 = 27,
    /// Callee-saved.
    X28 = 28,
    /// Frame pointer.
    X29 = 29,
    /// Link register.
    X30 = 30,
    /// Stack pointer.
    Sp = 31,
}

/// Register names indexed by encoding.
const NAMES: [&str; 32] = [
    "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8", "x9", "x10", "x11", "x12", "x13", "x14",
    "x15", "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23", "x24", "x25", "x26", "x27",
    "x28", "x29", "x30", "sp",
];

impl Register {
    /// The zero register.
    pub const ZR: Self = Self::X0;
    /// The frame pointer.
    pub const FP: Self = Self::X29;
    /// The link register.
    pub const LR: Self = Self::X30;

    /// All registers in encoding order.
    pub const ALL: [Self; 32] = [
        Self::X0,
        Self::X1,
        Self::X2,
        Self::X3,
        Self::X4,
        Self::X5,
        Self::X6,
        Self::X7,
        Self::X8,
        Self::X9,
        Self::X10,
        Self::X11,
        Self::X12,
        Self::X13,
        Self::X14,
        Self::X15,
        Self::X16,
        Self::X17,
        Self::X18,
        Self::X19,
        Self::X20,
        Self::X21,
        Self::X22,
        Self::X23,
        Self::X24,
        Self::X25,
        Self::X26,
        Self::X27,
        Self::X28,
        Self::X29,
        Self::X30,
        Self::Sp,
    ];

    /// Maps a register field value to its register.
    ///
    /// Only the low five bits are used, so every input names a register.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits as u64 & REG_MASK) as usize]
    }

    /// Returns the 5-bit field encoding.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the encoding as an index into a register file.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the assembler name (`x0`..`x30`, `sp`).
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Returns `true` for the hardwired zero register.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::X0)
    }

    /// Returns `true` for the six argument registers `x3`..`x8`.
    pub const fn is_argument(self) -> bool {
        matches!(self as u8, 3..=8)
    }

    /// Returns `true` for the temporaries `x9`..`x15`.
    pub const fn is_temporary(self) -> bool {
        matches!(self as u8, 9..=15)
    }

    /// Returns `true` for the callee-saved registers `x19`..`x28`.
    pub const fn is_callee_saved(self) -> bool {
        matches!(self as u8, 19..=28)
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg.bits()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
