//! # Codec Property Tests
//!
//! Round trip, field isolation and format partition, checked over random
//! operations and operands with `proptest`.

use proptest::prelude::*;
use proptest::sample::select;
use w64_isa::isa::addressing::MemoryMode;
use w64_isa::isa::decode::decode;
use w64_isa::isa::encode::{build_b, build_i, build_m_with_mode, build_r, build_r_shifted};
use w64_isa::isa::format::{Format, format_tag_of, is_b_type, is_i_type, is_m_type, is_r_type};
use w64_isa::isa::instruction::{Decoded, InstructionBits};
use w64_isa::isa::opcodes::{BOp, IOp, MOp, ROp};
use w64_isa::isa::shift::ShiftType;

fn r_op() -> impl Strategy<Value = ROp> {
    select(ROp::ALL)
}

fn i_op() -> impl Strategy<Value = IOp> {
    select(IOp::ALL)
}

fn b_op() -> impl Strategy<Value = BOp> {
    select(BOp::ALL)
}

fn m_op() -> impl Strategy<Value = MOp> {
    select(MOp::ALL)
}

fn mem_mode() -> impl Strategy<Value = MemoryMode> {
    select(MemoryMode::ALL.to_vec())
}

fn shift_type() -> impl Strategy<Value = ShiftType> {
    prop_oneof![
        Just(ShiftType::Lsl),
        Just(ShiftType::Lsr),
        Just(ShiftType::Asr),
        Just(ShiftType::Ror),
    ]
}

proptest! {
    // ── Round trip ─────────────────────────────────────────

    #[test]
    fn test_r_type_round_trip(op in r_op(), rd in 0u8..32, rn in 0u8..32, rm in 0u8..32) {
        let word = build_r(op, rd, rn, rm);
        prop_assert_eq!(word.opcode(), op.raw());
        prop_assert_eq!(word.rd(), rd);
        prop_assert_eq!(word.rn(), rn);
        prop_assert_eq!(word.rm(), rm);
        prop_assert!(matches!(decode(word), Decoded::R(_)));
    }

    #[test]
    fn test_r_shifted_round_trip(
        op in r_op(),
        rd in 0u8..32,
        rn in 0u8..32,
        rm in 0u8..32,
        shift in shift_type(),
        amount in 0u8..64,
    ) {
        let word = build_r_shifted(op, rd, rn, rm, shift, amount);
        let Decoded::R(f) = decode(word) else {
            return Err(TestCaseError::fail("expected an R-type payload"));
        };
        prop_assert_eq!(f.opcode, op.raw());
        prop_assert_eq!(f.rd.bits(), rd);
        prop_assert_eq!(f.rn.bits(), rn);
        prop_assert_eq!(f.rm.bits(), rm);
        prop_assert_eq!(f.shift_type, shift);
        prop_assert_eq!(f.shift_amount, amount);
    }

    #[test]
    fn test_i_type_round_trip(op in i_op(), rd in 0u8..32, rn in 0u8..32, imm in 0u64..(1 << 34)) {
        let word = build_i(op, rd, rn, imm);
        prop_assert_eq!(word.opcode(), op.raw());
        prop_assert_eq!(word.rd(), rd);
        prop_assert_eq!(word.rn(), rn);
        prop_assert_eq!(word.immediate(), imm);
    }

    #[test]
    fn test_b_type_round_trip(op in b_op(), offset in 0u64..(1 << 48)) {
        let word = build_b(op, offset);
        prop_assert_eq!(word.opcode(), op.raw());
        prop_assert_eq!(word.branch_offset(), offset);
    }

    #[test]
    fn test_m_type_round_trip(
        op in m_op(),
        rd in 0u8..32,
        rn in 0u8..32,
        mode in mem_mode(),
        offset in 0u64..(1 << 32),
    ) {
        let word = build_m_with_mode(op, rd, rn, mode, offset);
        let Decoded::M(f) = decode(word) else {
            return Err(TestCaseError::fail("expected an M-type payload"));
        };
        prop_assert_eq!(f.opcode, op.raw());
        prop_assert_eq!(f.rd.bits(), rd);
        prop_assert_eq!(f.rn.bits(), rn);
        prop_assert_eq!(f.memory_mode(), Some(mode));
        prop_assert_eq!(f.offset, offset);
    }

    // ── Truncation ─────────────────────────────────────────

    #[test]
    fn test_i_type_keeps_low_34_bits(op in i_op(), imm in any::<u64>()) {
        prop_assert_eq!(build_i(op, 0, 0, imm).immediate(), imm & 0x3_FFFF_FFFF);
        prop_assert_eq!(build_i(op, 0, 0, imm).opcode(), op.raw());
    }

    #[test]
    fn test_registers_keep_low_5_bits(op in r_op(), rd in any::<u8>(), rn in any::<u8>(), rm in any::<u8>()) {
        let word = build_r(op, rd, rn, rm);
        prop_assert_eq!(word.rd(), rd & 0x1F);
        prop_assert_eq!(word.rn(), rn & 0x1F);
        prop_assert_eq!(word.rm(), rm & 0x1F);
        prop_assert_eq!(word.opcode(), op.raw());
    }

    // ── Field isolation ────────────────────────────────────

    #[test]
    fn test_r_type_rm_is_isolated(op in r_op(), rd in 0u8..32, rn in 0u8..32, rm in 1u8..32) {
        let base = build_r(op, rd, rn, 0);
        let word = build_r(op, rd, rn, rm);
        prop_assert_eq!(word.opcode(), base.opcode());
        prop_assert_eq!(word.rd(), base.rd());
        prop_assert_eq!(word.rn(), base.rn());
        prop_assert_eq!(word.extended(), base.extended());
    }

    #[test]
    fn test_r_type_rd_is_isolated(op in r_op(), rd in 1u8..32, rn in 0u8..32, rm in 0u8..32) {
        let base = build_r(op, 0, rn, rm);
        let word = build_r(op, rd, rn, rm);
        prop_assert_eq!(word.opcode(), base.opcode());
        prop_assert_eq!(word.rn(), base.rn());
        prop_assert_eq!(word.rm(), base.rm());
    }

    #[test]
    fn test_i_type_immediate_is_isolated(op in i_op(), rd in 0u8..32, rn in 0u8..32, imm in any::<u64>()) {
        let base = build_i(op, rd, rn, 0);
        let word = build_i(op, rd, rn, imm);
        prop_assert_eq!(word.opcode(), base.opcode());
        prop_assert_eq!(word.rd(), base.rd());
        prop_assert_eq!(word.rn(), base.rn());
    }

    #[test]
    fn test_b_type_offset_is_isolated(op in b_op(), offset in any::<u64>()) {
        prop_assert_eq!(build_b(op, offset).opcode(), op.raw());
        prop_assert!(is_b_type(build_b(op, offset).opcode()));
    }

    #[test]
    fn test_m_type_fields_are_isolated(
        op in m_op(),
        rd in 0u8..32,
        rn in 0u8..32,
        mode in mem_mode(),
        offset in any::<u64>(),
    ) {
        let word = build_m_with_mode(op, rd, rn, mode, offset);
        prop_assert_eq!(word.opcode(), op.raw());
        prop_assert_eq!(word.rd(), rd);
        prop_assert_eq!(word.rn(), rn);
        prop_assert_eq!(word.mode(), mode.bits());
        prop_assert_eq!(word.rm(), 0);
    }

    // ── Decode totality ────────────────────────────────────

    #[test]
    fn test_decode_is_total_and_tag_driven(word in any::<u64>()) {
        let decoded = decode(word);
        prop_assert_eq!(decoded.opcode(), word.opcode());
        prop_assert_eq!(decoded.format(), format_tag_of(word.opcode()));
        prop_assert_eq!(decoded.format() as u64, word >> 62);
    }

    #[test]
    fn test_decode_re_encode_defined_words(word in any::<u64>()) {
        // Rebuilding from the payload reproduces every bit the format defines.
        match decode(word) {
            Decoded::R(f) => {
                if let Some(op) = ROp::from_number(f.opcode & 0x3FF) {
                    let rebuilt = build_r_shifted(op, f.rd.bits(), f.rn.bits(), f.rm.bits(), f.shift_type, f.shift_amount);
                    let defined = !0u64 << 37 | 0x3 << 32 | 0x3F << 26;
                    prop_assert_eq!(rebuilt, word & defined);
                }
            }
            Decoded::I(f) => {
                if let Some(op) = IOp::from_number(f.opcode & 0x3FF) {
                    let rebuilt = build_i(op, f.rd.bits(), f.rn.bits(), f.immediate);
                    let defined = !0u64 << 42 | 0x3_FFFF_FFFF;
                    prop_assert_eq!(rebuilt, word & defined);
                }
            }
            Decoded::B(f) => {
                if let Some(op) = BOp::from_number(f.opcode & 0x3FF) {
                    let defined = !0u64 << 52 | 0xFFFF_FFFF_FFFF;
                    prop_assert_eq!(build_b(op, f.offset), word & defined);
                }
            }
            Decoded::M(f) => {
                if let (Some(op), Some(mode)) = (MOp::from_number(f.opcode & 0x3FF), f.memory_mode()) {
                    let rebuilt = build_m_with_mode(op, f.rd.bits(), f.rn.bits(), mode, f.offset);
                    let defined = !0u64 << 42 | 0x7 << 34 | 0xFFFF_FFFF;
                    prop_assert_eq!(rebuilt, word & defined);
                }
            }
        }
    }
}

// ── Format partition (exhaustive) ──────────────────────────

#[test]
fn test_format_predicates_partition_opcode_space() {
    for opcode in 0u16..=0xFFF {
        let hits = [
            is_r_type(opcode),
            is_i_type(opcode),
            is_b_type(opcode),
            is_m_type(opcode),
        ]
        .iter()
        .filter(|&&hit| hit)
        .count();
        assert_eq!(hits, 1, "opcode {opcode:#05x}");
    }
}

#[test]
fn test_format_tag_of_agrees_with_predicates() {
    for opcode in 0u16..=0xFFF {
        let expected = match format_tag_of(opcode) {
            Format::R => is_r_type(opcode),
            Format::I => is_i_type(opcode),
            Format::B => is_b_type(opcode),
            Format::M => is_m_type(opcode),
        };
        assert!(expected, "opcode {opcode:#05x}");
    }
}
