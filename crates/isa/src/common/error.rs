//! Validation error definitions.
//!
//! The codec itself is total: every word decodes and every operand packs. The
//! errors here belong to the checked layer built on top of it. It provides:
//! 1. **Opcode Lookup:** Reporting opcodes and mnemonics with no defined operation.
//! 2. **Producer Contract:** Reporting operands wider than their field and
//!    opcodes paired with the wrong format's operands.
//! 3. **Configuration:** Reporting malformed codec configuration.

use thiserror::Error;

use crate::isa::format::Format;
use crate::isa::validate::Field;

/// Errors raised by the checked encode/decode layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IsaError {
    /// A 12-bit opcode that names no defined operation.
    ///
    /// Execution engines treat this as an illegal instruction.
    #[error("unknown opcode {0:#05x}")]
    UnknownOpcode(u16),

    /// A mnemonic that names no defined operation.
    #[error("unknown mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// An operand that does not fit its field and would be truncated.
    #[error("{field} operand {value:#x} does not fit in {width} bits")]
    OperandOutOfRange {
        /// The field the operand was destined for.
        field: Field,
        /// The rejected operand.
        value: u64,
        /// The field width in bits.
        width: u32,
    },

    /// An opcode whose format tag disagrees with the operands supplied for it.
    #[error("opcode {opcode:#05x} is {actual}, but {expected} operands were supplied")]
    FormatMismatch {
        /// The raw opcode.
        opcode: u16,
        /// The format implied by the supplied operands.
        expected: Format,
        /// The format encoded in the opcode's tag bits.
        actual: Format,
    },

    /// An M-type mode field value with no defined addressing mode.
    #[error("invalid memory addressing mode {0}")]
    InvalidMemoryMode(u8),

    /// Malformed codec configuration.
    #[error("invalid codec configuration: {0}")]
    Config(String),
}

/// Result alias for the checked layer.
pub type IsaResult<T> = Result<T, IsaError>;
