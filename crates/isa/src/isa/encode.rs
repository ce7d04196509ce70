//! Instruction word builders.
//!
//! One builder per format. Each takes the operation enum of its own format, so
//! an I-type opcode cannot be packed with R-type operands. Operands wider than
//! their field are narrowed with [`truncate_to_width`] before packing; the
//! builders never fail and never allocate.

use crate::common::bits::{place, truncate_to_width};
use crate::common::constants::{
    BRANCH_OFFSET_WIDTH, IMMEDIATE_WIDTH, MEMORY_OFFSET_WIDTH, MODE_SHIFT, MODE_WIDTH,
    OPCODE_SHIFT, OPCODE_WIDTH, RD_SHIFT, REG_WIDTH, RM_SHIFT, RN_SHIFT, SHIFT_AMOUNT_SHIFT,
    SHIFT_AMOUNT_WIDTH, SHIFT_TYPE_SHIFT, SHIFT_TYPE_WIDTH,
};
use crate::isa::addressing::MemoryMode;
use crate::isa::opcodes::{BOp, IOp, MOp, ROp};
use crate::isa::shift::ShiftType;

/// Places a 12-bit opcode in bits 52-63.
#[inline(always)]
const fn opcode_bits(raw: u16) -> u64 {
    place(raw as u64, OPCODE_SHIFT, OPCODE_WIDTH)
}

/// Places `rd` and `rn` in bits 42-51.
#[inline(always)]
const fn rd_rn_bits(rd: u8, rn: u8) -> u64 {
    place(rd as u64, RD_SHIFT, REG_WIDTH) | place(rn as u64, RN_SHIFT, REG_WIDTH)
}

/// Builds an R-type word.
///
/// # Arguments
///
/// * `op` - The register-format operation.
/// * `rd`, `rn`, `rm` - Register indices; only the low five bits are kept.
pub const fn build_r(op: ROp, rd: u8, rn: u8, rm: u8) -> u64 {
    opcode_bits(op.raw()) | rd_rn_bits(rd, rn) | place(rm as u64, RM_SHIFT, REG_WIDTH)
}

/// Builds an R-type word whose second operand is shifted.
///
/// The shift type lands in bits 32-33 and the amount, truncated to six bits,
/// in bits 26-31.
pub const fn build_r_shifted(
    op: ROp,
    rd: u8,
    rn: u8,
    rm: u8,
    shift: ShiftType,
    amount: u8,
) -> u64 {
    build_r(op, rd, rn, rm)
        | place(shift.bits() as u64, SHIFT_TYPE_SHIFT, SHIFT_TYPE_WIDTH)
        | place(amount as u64, SHIFT_AMOUNT_SHIFT, SHIFT_AMOUNT_WIDTH)
}

/// Builds an I-type word.
///
/// `imm` is truncated to 34 bits; `2^34 + 5` packs as `5`.
pub const fn build_i(op: IOp, rd: u8, rn: u8, imm: u64) -> u64 {
    opcode_bits(op.raw()) | rd_rn_bits(rd, rn) | truncate_to_width(imm, IMMEDIATE_WIDTH)
}

/// Builds a B-type word.
///
/// `offset` is a word-relative displacement already in two's complement; it is
/// truncated to 48 bits.
pub const fn build_b(op: BOp, offset: u64) -> u64 {
    opcode_bits(op.raw()) | truncate_to_width(offset, BRANCH_OFFSET_WIDTH)
}

/// Builds an M-type word with [`MemoryMode::Offset`] addressing.
///
/// `offset` is truncated to 32 bits.
pub const fn build_m(op: MOp, rd: u8, rn: u8, offset: u64) -> u64 {
    build_m_with_mode(op, rd, rn, MemoryMode::Offset, offset)
}

/// Builds an M-type word with an explicit addressing mode in bits 34-36.
pub const fn build_m_with_mode(op: MOp, rd: u8, rn: u8, mode: MemoryMode, offset: u64) -> u64 {
    opcode_bits(op.raw())
        | rd_rn_bits(rd, rn)
        | place(mode.bits() as u64, MODE_SHIFT, MODE_WIDTH)
        | truncate_to_width(offset, MEMORY_OFFSET_WIDTH)
}
