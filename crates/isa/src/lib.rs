//! Instruction word codec for a fixed-width 64-bit register ISA.
//!
//! This crate defines the binary encoding every assembler, disassembler and
//! execution engine for the ISA shares:
//! 1. **Layout:** A 12-bit opcode whose top two bits select one of four formats,
//!    followed by register, mode and payload fields at fixed offsets.
//! 2. **Opcode space:** One operation enum per format, so the format of an
//!    operation is known from its type.
//! 3. **Codec:** Total builders and a total decoder producing per-format payloads.
//! 4. **Checked layer:** Range and format validation, typed instructions, and a
//!    disassembler for diagnostics.
//!
//! ```
//! use w64_isa::isa::encode::build_m;
//! use w64_isa::isa::instruction::InstructionBits;
//! use w64_isa::isa::opcodes::MOp;
//!
//! let word = build_m(MOp::Ldr, 9, 31, 0x1000);
//! assert_eq!(word.rd(), 9);
//! assert_eq!(word.rn(), 31);
//! assert_eq!(word.memory_offset(), 0x1000);
//! ```
//!
//! Every function here is pure over `u64` values and safe to call from any
//! number of threads.

/// Common types and constants (layout, bit helpers, errors).
pub mod common;
/// Codec configuration (operand policy, disassembly options).
pub mod config;
/// Instruction set (opcodes, fields, encode, decode, validation, disassembly).
pub mod isa;

/// Configuration for the checked encoder and disassembler.
pub use crate::config::CodecConfig;
/// Error type of the checked layer.
pub use crate::common::error::IsaError;
/// Total decoder entry point.
pub use crate::isa::decode::decode;
/// Total builders, one per format.
pub use crate::isa::encode::{build_b, build_i, build_m, build_r};
/// Format tag and classification predicates.
pub use crate::isa::format::{Format, format_tag_of, is_b_type, is_i_type, is_m_type, is_r_type};
/// Field accessors on raw words.
pub use crate::isa::instruction::{Decoded, InstructionBits};
/// Operations.
pub use crate::isa::opcodes::{BOp, IOp, MOp, Opcode, ROp};
/// Typed instruction.
pub use crate::isa::typed::Instruction;
