//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode space, the field vocabularies, and the encode/decode
//! logic for the fixed-width 64-bit instruction word.
//!
//! # Formats
//!
//! * `R` (`00`): register operands `rd`, `rn`, `rm`, optional shifted `rm`.
//! * `I` (`01`): `rd`, `rn` and a 34-bit immediate.
//! * `B` (`10`): a 48-bit word-relative branch offset.
//! * `M` (`11`): `rd`, `rn`, an addressing mode and a 32-bit offset.

/// Memory addressing modes carried by M-type words.
pub mod addressing;

/// Branch condition codes.
pub mod condition;

/// Instruction word decoding into per-format payloads.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction word builders, one per format.
pub mod encode;

/// Processor status flag layout.
pub mod flags;

/// Format tags and classification predicates.
pub mod format;

/// Field accessors and decoded payload structures.
pub mod instruction;

/// Opcode numbering, one operation enum per format.
pub mod opcodes;

/// General-purpose register names.
pub mod register;

/// Shift types for shifted-register operands.
pub mod shift;

/// Typed instructions with fallible decoding and total encoding.
pub mod typed;

/// Checked encoding with operand range and format validation.
pub mod validate;
