//! Branch condition codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 4-bit condition code evaluated against the status flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Condition {
    /// Equal (`Z`).
    Eq = 0x0,
    /// Not equal (`!Z`).
    Ne = 0x1,
    /// Carry set / unsigned higher or same (`C`).
    Cs = 0x2,
    /// Carry clear / unsigned lower (`!C`).
    Cc = 0x3,
    /// Minus, negative (`N`).
    Mi = 0x4,
    /// Plus, positive or zero (`!N`).
    Pl = 0x5,
    /// Overflow (`V`).
    Vs = 0x6,
    /// No overflow (`!V`).
    Vc = 0x7,
    /// Unsigned higher (`C && !Z`).
    Hi = 0x8,
    /// Unsigned lower or same (`!C || Z`).
    Ls = 0x9,
    /// Signed greater than or equal (`N == V`).
    Ge = 0xA,
    /// Signed less than (`N != V`).
    Lt = 0xB,
    /// Signed greater than (`!Z && N == V`).
    Gt = 0xC,
    /// Signed less than or equal (`Z || N != V`).
    Le = 0xD,
    /// Always.
    Al = 0xE,
    /// Never.
    Nv = 0xF,
}

impl Condition {
    /// All condition codes in encoding order.
    pub const ALL: [Self; 16] = [
        Self::Eq,
        Self::Ne,
        Self::Cs,
        Self::Cc,
        Self::Mi,
        Self::Pl,
        Self::Vs,
        Self::Vc,
        Self::Hi,
        Self::Ls,
        Self::Ge,
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Al,
        Self::Nv,
    ];

    /// Maps the low four bits of `bits` to a condition code.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0xF) as usize]
    }

    /// Returns the 4-bit encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the complementary condition.
    ///
    /// Conditions pair up on the low encoding bit; `AL` and `NV` swap.
    pub const fn invert(self) -> Self {
        Self::from_bits(self as u8 ^ 1)
    }

    /// Returns the upper-case mnemonic suffix.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Ne => "NE",
            Self::Cs => "CS",
            Self::Cc => "CC",
            Self::Mi => "MI",
            Self::Pl => "PL",
            Self::Vs => "VS",
            Self::Vc => "VC",
            Self::Hi => "HI",
            Self::Ls => "LS",
            Self::Ge => "GE",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Le => "LE",
            Self::Al => "AL",
            Self::Nv => "NV",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
