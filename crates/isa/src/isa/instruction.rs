//! Instruction word field extraction and decoded payloads.
//!
//! Provides the fixed shift-and-mask accessors over a raw 64-bit word and the
//! per-format payload structures that [`decode`](crate::isa::decode::decode)
//! produces. Accessors never sign extend; immediates and offsets come back as
//! unsigned bit patterns of their declared width.

use serde::{Deserialize, Serialize};

use crate::common::bits::{extract, sign_extend};
use crate::common::constants::{
    BRANCH_OFFSET_MASK, BRANCH_OFFSET_WIDTH, EXTENDED_MASK, IMMEDIATE_MASK, IMMEDIATE_WIDTH,
    MEMORY_OFFSET_MASK, MEMORY_OFFSET_WIDTH, MODE_SHIFT, MODE_WIDTH, OPCODE_SHIFT, OPCODE_WIDTH,
    REG_WIDTH, RD_SHIFT, RM_SHIFT, RN_SHIFT, SHIFT_AMOUNT_SHIFT, SHIFT_AMOUNT_WIDTH,
    SHIFT_TYPE_SHIFT, SHIFT_TYPE_WIDTH,
};
use crate::isa::addressing::MemoryMode;
use crate::isa::format::{Format, format_tag_of};
use crate::isa::opcodes::Opcode;
use crate::isa::register::Register;
use crate::isa::shift::ShiftType;

/// Trait for extracting fields from encoded instruction words.
///
/// Every accessor is defined on every word. Which of them are meaningful
/// depends on the format in the opcode's tag bits; reading a field outside
/// that format's set returns whatever bits occupy that position.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 52-63).
    ///
    /// The top two bits of the returned 12-bit value are the format tag.
    fn opcode(&self) -> u16;

    /// Classifies the word by its opcode's format tag.
    fn format(&self) -> Format;

    /// Extracts the destination register field (bits 47-51).
    ///
    /// Register 0 is hardwired to zero by execution engines.
    fn rd(&self) -> u8;

    /// Extracts the first source register field (bits 42-46).
    fn rn(&self) -> u8;

    /// Extracts the second source register field (bits 37-41). R-type only.
    fn rm(&self) -> u8;

    /// Extracts the mode field (bits 34-36).
    ///
    /// M-type words keep their addressing mode here.
    fn mode(&self) -> u8;

    /// Extracts the extended region (bits 0-33).
    fn extended(&self) -> u64;

    /// Extracts the 34-bit immediate (bits 0-33). I-type only.
    fn immediate(&self) -> u64;

    /// Extracts the 48-bit branch offset (bits 0-47). B-type only.
    ///
    /// The offset is signed and word-relative; callers sign extend from 48 bits.
    fn branch_offset(&self) -> u64;

    /// Extracts the 32-bit memory offset (bits 0-31). M-type only.
    fn memory_offset(&self) -> u64;

    /// Extracts the shift type of a shifted-register operand (bits 32-33).
    fn shift_type(&self) -> u8;

    /// Extracts the shift amount of a shifted-register operand (bits 26-31).
    fn shift_amount(&self) -> u8;
}

impl InstructionBits for u64 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        extract(*self, OPCODE_SHIFT, OPCODE_WIDTH) as u16
    }

    #[inline(always)]
    fn format(&self) -> Format {
        format_tag_of(self.opcode())
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        extract(*self, RD_SHIFT, REG_WIDTH) as u8
    }

    #[inline(always)]
    fn rn(&self) -> u8 {
        extract(*self, RN_SHIFT, REG_WIDTH) as u8
    }

    #[inline(always)]
    fn rm(&self) -> u8 {
        extract(*self, RM_SHIFT, REG_WIDTH) as u8
    }

    #[inline(always)]
    fn mode(&self) -> u8 {
        extract(*self, MODE_SHIFT, MODE_WIDTH) as u8
    }

    #[inline(always)]
    fn extended(&self) -> u64 {
        self & EXTENDED_MASK
    }

    #[inline(always)]
    fn immediate(&self) -> u64 {
        self & IMMEDIATE_MASK
    }

    #[inline(always)]
    fn branch_offset(&self) -> u64 {
        self & BRANCH_OFFSET_MASK
    }

    #[inline(always)]
    fn memory_offset(&self) -> u64 {
        self & MEMORY_OFFSET_MASK
    }

    #[inline(always)]
    fn shift_type(&self) -> u8 {
        extract(*self, SHIFT_TYPE_SHIFT, SHIFT_TYPE_WIDTH) as u8
    }

    #[inline(always)]
    fn shift_amount(&self) -> u8 {
        extract(*self, SHIFT_AMOUNT_SHIFT, SHIFT_AMOUNT_WIDTH) as u8
    }
}

/// Fields of an R-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RFields {
    /// Raw 12-bit opcode.
    pub opcode: u16,
    /// Destination register.
    pub rd: Register,
    /// First source register.
    pub rn: Register,
    /// Second source register.
    pub rm: Register,
    /// Shift applied to `rm`, meaningful only for shifted-operand operations.
    pub shift_type: ShiftType,
    /// Shift amount (0-63), meaningful only for shifted-operand operations.
    pub shift_amount: u8,
}

/// Fields of an I-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IFields {
    /// Raw 12-bit opcode.
    pub opcode: u16,
    /// Destination register.
    pub rd: Register,
    /// Source register.
    pub rn: Register,
    /// 34-bit immediate as an unsigned bit pattern.
    pub immediate: u64,
}

impl IFields {
    /// Returns the immediate sign extended from 34 bits.
    pub const fn signed_immediate(&self) -> i64 {
        sign_extend(self.immediate, IMMEDIATE_WIDTH)
    }
}

/// Fields of a B-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BFields {
    /// Raw 12-bit opcode.
    pub opcode: u16,
    /// 48-bit word-relative offset as an unsigned bit pattern.
    pub offset: u64,
}

impl BFields {
    /// Returns the offset sign extended from 48 bits, in words.
    pub const fn signed_offset(&self) -> i64 {
        sign_extend(self.offset, BRANCH_OFFSET_WIDTH)
    }
}

/// Fields of an M-type word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MFields {
    /// Raw 12-bit opcode.
    pub opcode: u16,
    /// Data register (destination for loads, source for stores).
    pub rd: Register,
    /// Base address register.
    pub rn: Register,
    /// Raw 3-bit addressing mode field.
    pub mode: u8,
    /// 32-bit memory offset as an unsigned bit pattern.
    pub offset: u64,
}

impl MFields {
    /// Interprets the mode field, or `None` for encodings 5-7.
    pub const fn memory_mode(&self) -> Option<MemoryMode> {
        MemoryMode::from_bits(self.mode)
    }

    /// Returns the offset sign extended from 32 bits.
    pub const fn signed_offset(&self) -> i64 {
        sign_extend(self.offset, MEMORY_OFFSET_WIDTH)
    }
}

/// A decoded word: exactly the fields its format defines.
///
/// Produced by [`decode`](crate::isa::decode::decode) for every possible
/// input; the opcode may or may not name a defined operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decoded {
    /// Register format.
    R(RFields),
    /// Immediate format.
    I(IFields),
    /// Branch format.
    B(BFields),
    /// Memory format.
    M(MFields),
}

impl Decoded {
    /// Returns the raw 12-bit opcode.
    pub const fn opcode(&self) -> u16 {
        match self {
            Self::R(f) => f.opcode,
            Self::I(f) => f.opcode,
            Self::B(f) => f.opcode,
            Self::M(f) => f.opcode,
        }
    }

    /// Returns the format the opcode's tag selected.
    pub const fn format(&self) -> Format {
        match self {
            Self::R(_) => Format::R,
            Self::I(_) => Format::I,
            Self::B(_) => Format::B,
            Self::M(_) => Format::M,
        }
    }

    /// Looks up the defined operation, if the opcode names one.
    pub const fn operation(&self) -> Option<Opcode> {
        Opcode::from_raw(self.opcode())
    }
}
