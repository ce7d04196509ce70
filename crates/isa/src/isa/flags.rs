//! Processor status flags.
//!
//! A fixed 32-bit layout, least-significant bit first:
//!
//! | Bits   | Flag | Description              |
//! |--------|------|--------------------------|
//! |  0     | N    | Negative                 |
//! |  1     | Z    | Zero                     |
//! |  2     | C    | Carry                    |
//! |  3     | V    | Overflow                 |
//! |  4     | I    | IRQ disable              |
//! |  5     | F    | FIQ disable              |
//! |  6     | T    | Thumb state              |
//! |  7-11  | M    | Processor mode (5 bits)  |
//! | 12-31  | -    | Reserved, reads as zero  |
//!
//! The codec never produces this value; it shares the word's fixed-bitfield
//! treatment so execution engines can pack and unpack it the same way.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::common::bits::{extract, place};

/// Bit position of the 5-bit mode field.
const MODE_SHIFT: u32 = 7;
/// Width of the mode field.
const MODE_WIDTH: u32 = 5;
/// Mask of every defined (non-reserved) bit.
const DEFINED_MASK: u32 = 0xFFF;

/// Condition and control state as a packed bit record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusFlags(u32);

impl StatusFlags {
    /// No flags set, mode zero.
    pub const NONE: Self = Self(0);
    /// Negative.
    pub const N: Self = Self(1 << 0);
    /// Zero.
    pub const Z: Self = Self(1 << 1);
    /// Carry.
    pub const C: Self = Self(1 << 2);
    /// Overflow.
    pub const V: Self = Self(1 << 3);
    /// IRQ disable.
    pub const I: Self = Self(1 << 4);
    /// FIQ disable.
    pub const F: Self = Self(1 << 5);
    /// Thumb state.
    pub const T: Self = Self(1 << 6);

    /// Builds flags from a raw word, clearing the reserved bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & DEFINED_MASK)
    }

    /// Returns the packed 32-bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns a copy with the flags in `other` set or cleared.
    #[must_use]
    pub const fn with(self, other: Self, on: bool) -> Self {
        if on {
            Self(self.0 | other.0)
        } else {
            Self(self.0 & !other.0)
        }
    }

    /// Negative flag.
    pub const fn n(self) -> bool {
        self.contains(Self::N)
    }

    /// Zero flag.
    pub const fn z(self) -> bool {
        self.contains(Self::Z)
    }

    /// Carry flag.
    pub const fn c(self) -> bool {
        self.contains(Self::C)
    }

    /// Overflow flag.
    pub const fn v(self) -> bool {
        self.contains(Self::V)
    }

    /// IRQ disable flag.
    pub const fn irq_disabled(self) -> bool {
        self.contains(Self::I)
    }

    /// FIQ disable flag.
    pub const fn fiq_disabled(self) -> bool {
        self.contains(Self::F)
    }

    /// Thumb state flag.
    pub const fn thumb(self) -> bool {
        self.contains(Self::T)
    }

    /// Returns the 5-bit processor mode.
    pub const fn mode(self) -> u8 {
        extract(self.0 as u64, MODE_SHIFT, MODE_WIDTH) as u8
    }

    /// Returns a copy with the mode field replaced by the low five bits of `mode`.
    #[must_use]
    pub const fn with_mode(self, mode: u8) -> Self {
        let cleared = self.0 & !(0x1F << MODE_SHIFT);
        Self(cleared | place(mode as u64, MODE_SHIFT, MODE_WIDTH) as u32)
    }
}

impl BitOr for StatusFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for StatusFlags {
    /// Formats the condition flags as `NZCV`, lower case when clear.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = |set: bool, c: char| if set { c } else { c.to_ascii_lowercase() };
        write!(
            f,
            "{}{}{}{}",
            letter(self.n(), 'N'),
            letter(self.z(), 'Z'),
            letter(self.c(), 'C'),
            letter(self.v(), 'V'),
        )
    }
}
