//! # Opcode Space Tests
//!
//! Uniqueness of opcodes and mnemonics, agreement between each operation's
//! type and its tag, and the lookup paths (raw value, mnemonic).

use std::collections::HashSet;
use std::str::FromStr;

use pretty_assertions::assert_eq;
use rstest::rstest;
use w64_isa::common::error::IsaError;
use w64_isa::isa::format::{Format, format_tag_of};
use w64_isa::isa::opcodes::{BOp, IOp, MOp, Opcode, ROp};

#[test]
fn test_opcodes_are_unique() {
    let mut seen = HashSet::new();
    for op in Opcode::all() {
        assert!(seen.insert(op.raw()), "duplicate opcode {:#05x} ({op})", op.raw());
    }
    assert_eq!(
        seen.len(),
        ROp::ALL.len() + IOp::ALL.len() + BOp::ALL.len() + MOp::ALL.len()
    );
}

#[test]
fn test_mnemonics_are_unique() {
    let mut seen = HashSet::new();
    for op in Opcode::all() {
        assert!(seen.insert(op.mnemonic()), "duplicate mnemonic {op}");
    }
}

#[test]
fn test_operation_numbers_fit_below_tag() {
    for op in Opcode::all() {
        assert!(op.number() < 0x400, "{op} number {:#x}", op.number());
        assert_eq!(op.raw() >> 10, op.format().tag());
    }
}

#[test]
fn test_tag_agrees_with_type() {
    for op in ROp::ALL {
        assert_eq!(format_tag_of(op.raw()), Format::R, "{op}");
    }
    for op in IOp::ALL {
        assert_eq!(format_tag_of(op.raw()), Format::I, "{op}");
    }
    for op in BOp::ALL {
        assert_eq!(format_tag_of(op.raw()), Format::B, "{op}");
    }
    for op in MOp::ALL {
        assert_eq!(format_tag_of(op.raw()), Format::M, "{op}");
    }
}

#[test]
fn test_from_raw_inverts_raw() {
    for op in Opcode::all() {
        assert_eq!(Opcode::from_raw(op.raw()), Some(op));
        assert_eq!(Opcode::try_from(op.raw()), Ok(op));
    }
}

#[test]
fn test_from_raw_covers_exactly_the_defined_set() {
    let defined: HashSet<u16> = Opcode::all().map(Opcode::raw).collect();
    for raw in 0u16..=0xFFF {
        assert_eq!(Opcode::from_raw(raw).is_some(), defined.contains(&raw), "{raw:#05x}");
    }
}

#[rstest]
#[case(0x1000)]
#[case(0x1080)]
#[case(u16::MAX)]
fn test_from_raw_rejects_wide_values(#[case] raw: u16) {
    assert_eq!(Opcode::from_raw(raw), None);
    assert_eq!(Opcode::try_from(raw), Err(IsaError::UnknownOpcode(raw)));
}

#[test]
fn test_same_number_in_different_formats() {
    // Register and immediate forms of one operation share a number.
    assert_eq!(ROp::AddReg.number(), IOp::AddImm.number());
    assert_ne!(ROp::AddReg.raw(), IOp::AddImm.raw());
    assert_eq!(Opcode::from_raw(0x080), Some(Opcode::R(ROp::AddReg)));
    assert_eq!(Opcode::from_raw(0x480), Some(Opcode::I(IOp::AddImm)));
}

#[rstest]
#[case("ADD_REG", Opcode::R(ROp::AddReg))]
#[case("add_imm", Opcode::I(IOp::AddImm))]
#[case("B_Cond", Opcode::B(BOp::BCond))]
#[case("ldrsw", Opcode::M(MOp::Ldrsw))]
#[case("SVC", Opcode::I(IOp::Svc))]
fn test_from_str(#[case] text: &str, #[case] expected: Opcode) {
    assert_eq!(Opcode::from_str(text), Ok(expected));
}

#[test]
fn test_from_str_unknown() {
    assert_eq!(
        "FMADD".parse::<Opcode>(),
        Err(IsaError::UnknownMnemonic("FMADD".to_owned()))
    );
}

#[test]
fn test_display_round_trips_through_from_str() {
    for op in Opcode::all() {
        assert_eq!(op.to_string().parse::<Opcode>(), Ok(op));
    }
}

#[test]
fn test_from_sub_enum() {
    assert_eq!(Opcode::from(MOp::Push), Opcode::M(MOp::Push));
    assert_eq!(Opcode::from(BOp::Tbnz).format(), Format::B);
    assert_eq!(Opcode::from(ROp::Ret).raw(), ROp::Ret.raw());
}

#[test]
fn test_shifted_operand_operations() {
    assert!(ROp::AddReg.takes_shifted_operand());
    assert!(ROp::CmpReg.takes_shifted_operand());
    assert!(!ROp::Mul.takes_shifted_operand());
    assert!(!ROp::Ret.takes_shifted_operand());
}
