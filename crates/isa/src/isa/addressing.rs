//! Memory addressing modes.
//!
//! M-type words carry the addressing mode in the 3-bit `mode` field
//! (bits 34-36), which the 32-bit memory offset leaves untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::IsaError;

/// How an M-type operation forms its effective address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MemoryMode {
    /// `[base + offset]`
    #[default]
    Offset = 0,
    /// `[base + offset]!` with base write-back before the access.
    PreIndex = 1,
    /// `[base], offset` with base write-back after the access.
    PostIndex = 2,
    /// `[base, Rm{, extend {#amount}}]`
    Register = 3,
    /// `[base, Rm, LSL #amount]`
    Scaled = 4,
}

impl MemoryMode {
    /// All defined addressing modes in encoding order.
    pub const ALL: [Self; 5] = [
        Self::Offset,
        Self::PreIndex,
        Self::PostIndex,
        Self::Register,
        Self::Scaled,
    ];

    /// Maps a 3-bit mode field to an addressing mode.
    ///
    /// Encodings 5-7 are undefined and yield `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Offset),
            1 => Some(Self::PreIndex),
            2 => Some(Self::PostIndex),
            3 => Some(Self::Register),
            4 => Some(Self::Scaled),
            _ => None,
        }
    }

    /// Returns the 3-bit encoding.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Returns `true` if the mode writes the updated address back to the base.
    pub const fn writes_back(self) -> bool {
        matches!(self, Self::PreIndex | Self::PostIndex)
    }

    /// Returns the lower-case mode name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Offset => "offset",
            Self::PreIndex => "pre-index",
            Self::PostIndex => "post-index",
            Self::Register => "register",
            Self::Scaled => "scaled",
        }
    }
}

impl TryFrom<u8> for MemoryMode {
    type Error = IsaError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(IsaError::InvalidMemoryMode(bits))
    }
}

impl fmt::Display for MemoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
