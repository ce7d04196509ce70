//! Instruction Disassembler.
//!
//! Converts a 64-bit instruction word into a human-readable line for debug
//! tracing, logging, and test diagnostics. The output is informational and is
//! not meant to be parsed back.
//!
//! # Usage
//!
//! ```
//! use w64_isa::isa::disasm::disassemble;
//! use w64_isa::isa::encode::build_r;
//! use w64_isa::isa::opcodes::ROp;
//!
//! let text = disassemble(build_r(ROp::AddReg, 1, 2, 3));
//! assert_eq!(text, "ADD_REG x1, x2, x3");
//! ```

use crate::config::CodecConfig;
use crate::isa::addressing::MemoryMode;
use crate::isa::decode::decode;
use crate::isa::instruction::{BFields, Decoded, IFields, MFields, RFields};
use crate::isa::opcodes::{IOp, Opcode, ROp};

/// Disassembles a word with the default configuration.
///
/// Returns `<unknown opcode 0x...>` for opcodes with no defined operation.
pub fn disassemble(word: u64) -> String {
    disassemble_with(word, &CodecConfig::default())
}

/// Disassembles a word.
///
/// # Arguments
///
/// * `word` - The raw 64-bit instruction word.
/// * `config` - Controls whether I-type immediates print signed.
pub fn disassemble_with(word: u64, config: &CodecConfig) -> String {
    let decoded = decode(word);
    let Some(op) = decoded.operation() else {
        return format!("<unknown opcode {:#05x}>", decoded.opcode());
    };

    match decoded {
        Decoded::R(f) => disasm_r(op, &f),
        Decoded::I(f) => disasm_i(op, &f, config.sign_extend_immediates),
        Decoded::B(f) => disasm_b(op, &f),
        Decoded::M(f) => disasm_m(op, &f),
    }
}

fn disasm_r(op: Opcode, f: &RFields) -> String {
    if matches!(op, Opcode::R(ROp::Hlt | ROp::Nop)) {
        return op.mnemonic().to_owned();
    }
    let base = format!("{op} {}, {}, {}", f.rd, f.rn, f.rm);
    if f.shift_amount == 0 {
        base
    } else {
        format!("{base}, {} #{}", f.shift_type, f.shift_amount)
    }
}

fn disasm_i(op: Opcode, f: &IFields, signed: bool) -> String {
    let imm = if signed {
        format!("#{}", f.signed_immediate())
    } else {
        format!("#{:#x}", f.immediate)
    };
    if matches!(op, Opcode::I(IOp::Svc)) {
        return format!("{op} {imm}");
    }
    format!("{op} {}, {}, {imm}", f.rd, f.rn)
}

/// Branch offsets are always shown signed, in words.
fn disasm_b(op: Opcode, f: &BFields) -> String {
    format!("{op} #{}", f.signed_offset())
}

fn disasm_m(op: Opcode, f: &MFields) -> String {
    let (rd, rn, off) = (f.rd, f.rn, f.offset);
    match f.memory_mode() {
        Some(MemoryMode::Offset) if off == 0 => format!("{op} {rd}, [{rn}]"),
        Some(MemoryMode::Offset) => format!("{op} {rd}, [{rn}, #{off:#x}]"),
        Some(MemoryMode::PreIndex) => format!("{op} {rd}, [{rn}, #{off:#x}]!"),
        Some(MemoryMode::PostIndex) => format!("{op} {rd}, [{rn}], #{off:#x}"),
        Some(mode) => format!("{op} {rd}, [{rn}, #{off:#x}] ({mode})"),
        None => format!("{op} {rd}, [{rn}, #{off:#x}] (mode {})", f.mode),
    }
}
