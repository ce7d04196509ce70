//! Opcode space.
//!
//! Every operation owns a 12-bit opcode `(format_tag << 10) | operation_number`.
//! Operations are grouped into one enum per format, so the format is a property
//! of the type rather than of a runtime bitmask, and [`Opcode`] is the sum of
//! the four.
//!
//! Operation numbers follow a category convention, `(category << 6) | index`:
//!
//! | Category | Meaning          |
//! |----------|------------------|
//! | `0x1`    | Data movement    |
//! | `0x2`    | Arithmetic       |
//! | `0x3`    | Logical          |
//! | `0x4`    | Shifts           |
//! | `0x5`    | Comparison       |
//! | `0x6`    | Branches         |
//! | `0x7`    | Memory           |
//! | `0x8`    | Stack            |
//! | `0x9`    | System           |
//!
//! Conditional branches start at index `0x10` of the branch category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::constants::{OPCODE_MASK, OPERATION_MASK};
use crate::common::error::IsaError;
use crate::isa::format::{Format, format_tag_of};

macro_rules! operations {
    (
        $(#[$meta:meta])*
        $name:ident($wrap:ident): $format:expr => {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $number:literal => $mnemonic:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $number,
            )*
        }

        impl $name {
            /// Every operation of this format, in numbering order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The format shared by every operation of this type.
            pub const FORMAT: Format = $format;

            /// Returns the 10-bit operation number.
            #[inline(always)]
            pub const fn number(self) -> u16 {
                self as u16
            }

            /// Returns the full 12-bit opcode, format tag included.
            #[inline(always)]
            pub const fn raw(self) -> u16 {
                Self::FORMAT.pattern() | self.number()
            }

            /// Looks up an operation by its 10-bit operation number.
            pub const fn from_number(number: u16) -> Option<Self> {
                match number {
                    $($number => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the upper-case mnemonic.
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $(Self::$variant => $mnemonic,)*
                }
            }
        }

        impl From<$name> for Opcode {
            fn from(op: $name) -> Self {
                Self::$wrap(op)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.mnemonic())
            }
        }
    };
}

operations! {
    /// Register-format (R-type) operations.
    ROp(R): Format::R => {
        /// Move register.
        MovReg = 0x040 => "MOV_REG",
        /// Add registers.
        AddReg = 0x080 => "ADD_REG",
        /// Subtract registers.
        SubReg = 0x081 => "SUB_REG",
        /// Multiply.
        Mul = 0x082 => "MUL",
        /// Signed divide.
        Sdiv = 0x083 => "SDIV",
        /// Unsigned divide.
        Udiv = 0x084 => "UDIV",
        /// Bitwise AND of registers.
        AndReg = 0x0C0 => "AND_REG",
        /// Bitwise OR of registers.
        OrrReg = 0x0C1 => "ORR_REG",
        /// Bitwise XOR of registers.
        EorReg = 0x0C2 => "EOR_REG",
        /// Logical shift left by register.
        LslReg = 0x100 => "LSL_REG",
        /// Logical shift right by register.
        LsrReg = 0x101 => "LSR_REG",
        /// Arithmetic shift right by register.
        AsrReg = 0x102 => "ASR_REG",
        /// Compare registers.
        CmpReg = 0x140 => "CMP_REG",
        /// Test registers.
        TstReg = 0x141 => "TST_REG",
        /// Branch to register.
        Br = 0x182 => "BR",
        /// Branch and link to register.
        Blr = 0x183 => "BLR",
        /// Return.
        Ret = 0x184 => "RET",
        /// Halt.
        Hlt = 0x241 => "HLT",
        /// No operation.
        Nop = 0x242 => "NOP",
    }
}

operations! {
    /// Immediate-format (I-type) operations.
    IOp(I): Format::I => {
        /// Move immediate.
        MovImm = 0x040 => "MOV_IMM",
        /// Move with zero.
        Movz = 0x041 => "MOVZ",
        /// Move keeping bits.
        Movk = 0x042 => "MOVK",
        /// Add immediate.
        AddImm = 0x080 => "ADD_IMM",
        /// Subtract immediate.
        SubImm = 0x081 => "SUB_IMM",
        /// Bitwise AND with immediate.
        AndImm = 0x0C0 => "AND_IMM",
        /// Bitwise OR with immediate.
        OrrImm = 0x0C1 => "ORR_IMM",
        /// Bitwise XOR with immediate.
        EorImm = 0x0C2 => "EOR_IMM",
        /// Logical shift left by immediate.
        LslImm = 0x100 => "LSL_IMM",
        /// Logical shift right by immediate.
        LsrImm = 0x101 => "LSR_IMM",
        /// Arithmetic shift right by immediate.
        AsrImm = 0x102 => "ASR_IMM",
        /// Compare with immediate.
        CmpImm = 0x140 => "CMP_IMM",
        /// Test with immediate.
        TstImm = 0x141 => "TST_IMM",
        /// Supervisor call.
        Svc = 0x240 => "SVC",
    }
}

operations! {
    /// Branch-format (B-type) operations.
    BOp(B): Format::B => {
        /// Branch.
        B = 0x180 => "B",
        /// Branch and link.
        Bl = 0x181 => "BL",
        /// Conditional branch.
        BCond = 0x190 => "B_COND",
        /// Compare and branch if zero.
        Cbz = 0x191 => "CBZ",
        /// Compare and branch if not zero.
        Cbnz = 0x192 => "CBNZ",
        /// Test bit and branch if zero.
        Tbz = 0x193 => "TBZ",
        /// Test bit and branch if not zero.
        Tbnz = 0x194 => "TBNZ",
    }
}

operations! {
    /// Memory-format (M-type) operations.
    MOp(M): Format::M => {
        /// Load register.
        Ldr = 0x1C0 => "LDR",
        /// Store register.
        Str = 0x1C1 => "STR",
        /// Load byte.
        Ldrb = 0x1C2 => "LDRB",
        /// Store byte.
        Strb = 0x1C3 => "STRB",
        /// Load halfword.
        Ldrh = 0x1C4 => "LDRH",
        /// Store halfword.
        Strh = 0x1C5 => "STRH",
        /// Load signed word.
        Ldrsw = 0x1C6 => "LDRSW",
        /// Push registers.
        Push = 0x200 => "PUSH",
        /// Pop registers.
        Pop = 0x201 => "POP",
    }
}

impl ROp {
    /// Returns `true` for operations that read a shifted second operand.
    pub const fn takes_shifted_operand(self) -> bool {
        matches!(
            self,
            Self::AddReg
                | Self::SubReg
                | Self::AndReg
                | Self::OrrReg
                | Self::EorReg
                | Self::CmpReg
                | Self::TstReg
        )
    }
}

/// A defined operation, tagged with its format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Opcode {
    /// A register-format operation.
    R(ROp),
    /// An immediate-format operation.
    I(IOp),
    /// A branch-format operation.
    B(BOp),
    /// A memory-format operation.
    M(MOp),
}

impl Opcode {
    /// Returns the operation's format.
    #[inline]
    pub const fn format(self) -> Format {
        match self {
            Self::R(_) => Format::R,
            Self::I(_) => Format::I,
            Self::B(_) => Format::B,
            Self::M(_) => Format::M,
        }
    }

    /// Returns the 10-bit operation number.
    #[inline]
    pub const fn number(self) -> u16 {
        match self {
            Self::R(op) => op.number(),
            Self::I(op) => op.number(),
            Self::B(op) => op.number(),
            Self::M(op) => op.number(),
        }
    }

    /// Returns the full 12-bit opcode.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.format().pattern() | self.number()
    }

    /// Returns the upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::R(op) => op.mnemonic(),
            Self::I(op) => op.mnemonic(),
            Self::B(op) => op.mnemonic(),
            Self::M(op) => op.mnemonic(),
        }
    }

    /// Looks up the operation a raw 12-bit opcode names.
    ///
    /// Returns `None` for opcodes with no defined operation, including any
    /// value wider than 12 bits.
    pub const fn from_raw(raw: u16) -> Option<Self> {
        if raw as u64 & !OPCODE_MASK != 0 {
            return None;
        }
        let number = raw & OPERATION_MASK;
        match format_tag_of(raw) {
            Format::R => match ROp::from_number(number) {
                Some(op) => Some(Self::R(op)),
                None => None,
            },
            Format::I => match IOp::from_number(number) {
                Some(op) => Some(Self::I(op)),
                None => None,
            },
            Format::B => match BOp::from_number(number) {
                Some(op) => Some(Self::B(op)),
                None => None,
            },
            Format::M => match MOp::from_number(number) {
                Some(op) => Some(Self::M(op)),
                None => None,
            },
        }
    }

    /// Iterates over every defined operation, grouped by format.
    pub fn all() -> impl Iterator<Item = Self> {
        ROp::ALL
            .iter()
            .copied()
            .map(Self::R)
            .chain(IOp::ALL.iter().copied().map(Self::I))
            .chain(BOp::ALL.iter().copied().map(Self::B))
            .chain(MOp::ALL.iter().copied().map(Self::M))
    }
}

impl TryFrom<u16> for Opcode {
    type Error = IsaError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(IsaError::UnknownOpcode(raw))
    }
}

impl FromStr for Opcode {
    type Err = IsaError;

    /// Looks up an operation by mnemonic, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| IsaError::UnknownMnemonic(s.to_owned()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
