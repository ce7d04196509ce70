//! Instruction Word Decoder.
//!
//! This module unpacks a raw 64-bit word into the [`Decoded`] payload of its
//! format. It reads the opcode, classifies it by the tag bits, and extracts
//! only the fields that format defines. Decoding is total: any word produces a
//! payload, and no sign extension is applied.

use crate::isa::format::{Format, format_tag_of};
use crate::isa::instruction::{BFields, Decoded, IFields, InstructionBits, MFields, RFields};
use crate::isa::register::Register;
use crate::isa::shift::ShiftType;

/// Decodes an instruction word into its format's fields.
///
/// # Arguments
///
/// * `word` - The raw 64-bit instruction word.
///
/// # Returns
///
/// A [`Decoded`] payload selected by the opcode's format tag.
pub fn decode(word: u64) -> Decoded {
    let opcode = word.opcode();

    match format_tag_of(opcode) {
        Format::R => Decoded::R(decode_r_type(word, opcode)),
        Format::I => Decoded::I(decode_i_type(word, opcode)),
        Format::B => Decoded::B(decode_b_type(word, opcode)),
        Format::M => Decoded::M(decode_m_type(word, opcode)),
    }
}

/// Decodes a batch of words.
pub fn decode_all(words: &[u64]) -> Vec<Decoded> {
    words.iter().copied().map(decode).collect()
}

/// R-type: `opcode | rd | rn | rm | - | shift_type | shift_amount | -`
fn decode_r_type(word: u64, opcode: u16) -> RFields {
    RFields {
        opcode,
        rd: Register::from_bits(word.rd()),
        rn: Register::from_bits(word.rn()),
        rm: Register::from_bits(word.rm()),
        shift_type: ShiftType::from_bits(word.shift_type()),
        shift_amount: word.shift_amount(),
    }
}

/// I-type: `opcode | rd | rn | - | imm[33:0]`
fn decode_i_type(word: u64, opcode: u16) -> IFields {
    IFields {
        opcode,
        rd: Register::from_bits(word.rd()),
        rn: Register::from_bits(word.rn()),
        immediate: word.immediate(),
    }
}

/// B-type: `opcode | - | offset[47:0]`
fn decode_b_type(word: u64, opcode: u16) -> BFields {
    BFields {
        opcode,
        offset: word.branch_offset(),
    }
}

/// M-type: `opcode | rd | rn | - | mode | - | offset[31:0]`
fn decode_m_type(word: u64, opcode: u16) -> MFields {
    MFields {
        opcode,
        rd: Register::from_bits(word.rd()),
        rn: Register::from_bits(word.rn()),
        mode: word.mode(),
        offset: word.memory_offset(),
    }
}
