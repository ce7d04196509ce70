//! Instruction format classification.
//!
//! The two most-significant opcode bits (word bits 62-63) are the format tag.
//! All four formats place it at the same offset, so a consumer can classify a
//! word before it knows which operation it holds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::{
    FORMAT_TAG_SHIFT, PATTERN_B_TYPE, PATTERN_I_TYPE, PATTERN_M_TYPE, PATTERN_R_TYPE, TYPE_MASK,
};

/// The four mutually exclusive instruction layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    /// Register format (tag `00`): `rd`, `rn`, `rm`, optional shifted operand.
    R = 0,
    /// Immediate format (tag `01`): `rd`, `rn`, 34-bit immediate.
    I = 1,
    /// Branch format (tag `10`): 48-bit word-relative offset.
    B = 2,
    /// Memory format (tag `11`): `rd`, `rn`, addressing mode, 32-bit offset.
    M = 3,
}

impl Format {
    /// All formats in tag order.
    pub const ALL: [Self; 4] = [Self::R, Self::I, Self::B, Self::M];

    /// Maps a 2-bit tag to its format. Bits above the low two are ignored.
    #[inline]
    pub const fn from_tag(tag: u16) -> Self {
        match tag & 0b11 {
            0 => Self::R,
            1 => Self::I,
            2 => Self::B,
            _ => Self::M,
        }
    }

    /// Returns the 2-bit tag value.
    #[inline]
    pub const fn tag(self) -> u16 {
        self as u16
    }

    /// Returns the tag already shifted into opcode position.
    #[inline]
    pub const fn pattern(self) -> u16 {
        match self {
            Self::R => PATTERN_R_TYPE,
            Self::I => PATTERN_I_TYPE,
            Self::B => PATTERN_B_TYPE,
            Self::M => PATTERN_M_TYPE,
        }
    }

    /// Returns the conventional name of the format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R-type",
            Self::I => "I-type",
            Self::B => "B-type",
            Self::M => "M-type",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a 12-bit opcode by its format tag.
///
/// Total over every input: the four tags partition the 2-bit space, and bits
/// above the opcode width are ignored.
#[inline(always)]
pub const fn format_tag_of(opcode: u16) -> Format {
    Format::from_tag((opcode & TYPE_MASK) >> FORMAT_TAG_SHIFT)
}

/// Returns `true` if the opcode carries the R-type tag.
#[inline(always)]
pub const fn is_r_type(opcode: u16) -> bool {
    (opcode & TYPE_MASK) == PATTERN_R_TYPE
}

/// Returns `true` if the opcode carries the I-type tag.
#[inline(always)]
pub const fn is_i_type(opcode: u16) -> bool {
    (opcode & TYPE_MASK) == PATTERN_I_TYPE
}

/// Returns `true` if the opcode carries the B-type tag.
#[inline(always)]
pub const fn is_b_type(opcode: u16) -> bool {
    (opcode & TYPE_MASK) == PATTERN_B_TYPE
}

/// Returns `true` if the opcode carries the M-type tag.
#[inline(always)]
pub const fn is_m_type(opcode: u16) -> bool {
    (opcode & TYPE_MASK) == PATTERN_M_TYPE
}
