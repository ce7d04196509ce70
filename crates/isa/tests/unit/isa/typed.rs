//! # Typed Instruction Tests

use pretty_assertions::assert_eq;
use w64_isa::common::error::IsaError;
use w64_isa::isa::addressing::MemoryMode;
use w64_isa::isa::decode::decode;
use w64_isa::isa::encode::{build_b, build_i, build_m, build_r};
use w64_isa::isa::format::Format;
use w64_isa::isa::instruction::{Decoded, IFields, InstructionBits};
use w64_isa::isa::opcodes::{BOp, IOp, MOp, Opcode, ROp};
use w64_isa::isa::register::Register;
use w64_isa::isa::shift::ShiftType;
use w64_isa::isa::typed::Instruction;

use crate::common::builder::WordBuilder;

#[test]
fn test_encode_matches_builders() {
    let cases = [
        (
            Instruction::r(ROp::AddReg, Register::X1, Register::X2, Register::X3),
            build_r(ROp::AddReg, 1, 2, 3),
        ),
        (
            Instruction::i(IOp::MovImm, Register::X5, Register::ZR, 42),
            build_i(IOp::MovImm, 5, 0, 42),
        ),
        (Instruction::b(BOp::Bl, 0x100), build_b(BOp::Bl, 0x100)),
        (
            Instruction::m(MOp::Str, Register::LR, Register::Sp, 8),
            build_m(MOp::Str, 30, 31, 8),
        ),
    ];
    for (inst, word) in cases {
        assert_eq!(inst.encode(), word, "{inst:?}");
        assert_eq!(u64::from(inst), word);
    }
}

#[test]
fn test_from_word_round_trip() {
    let insts = [
        Instruction::R {
            op: ROp::OrrReg,
            rd: Register::X7,
            rn: Register::X8,
            rm: Register::X9,
            shift: ShiftType::Ror,
            amount: 63,
        },
        Instruction::i(IOp::Svc, Register::X0, Register::X0, 93),
        Instruction::b(BOp::Cbnz, 0xFFFF_FFFF_FFF0),
        Instruction::M {
            op: MOp::Ldr,
            rd: Register::X1,
            rn: Register::X2,
            mode: MemoryMode::PostIndex,
            offset: 16,
        },
    ];
    for inst in insts {
        assert_eq!(Instruction::from_word(inst.encode()), Ok(inst));
        assert_eq!(Instruction::try_from(inst.encode()), Ok(inst));
    }
}

#[test]
fn test_opcode_accessor() {
    assert_eq!(
        Instruction::b(BOp::BCond, 0).opcode(),
        Opcode::B(BOp::BCond)
    );
    assert_eq!(
        Instruction::m(MOp::Pop, Register::X0, Register::Sp, 0).opcode().format(),
        Format::M
    );
}

#[test]
fn test_encode_truncates_wide_payloads() {
    let inst = Instruction::i(IOp::AddImm, Register::X1, Register::X1, u64::MAX);
    assert_eq!(inst.encode().immediate(), 0x3_FFFF_FFFF);
    assert_eq!(inst.encode().rd(), 1);

    let inst = Instruction::R {
        op: ROp::AddReg,
        rd: Register::X1,
        rn: Register::X2,
        rm: Register::X3,
        shift: ShiftType::Lsl,
        amount: 0xFF,
    };
    assert_eq!(inst.encode().shift_amount(), 0x3F);
}

#[test]
fn test_from_word_unknown_opcode() {
    let word = WordBuilder::new().opcode(0x7FF).rd(1).build();
    assert_eq!(Instruction::from_word(word), Err(IsaError::UnknownOpcode(0x7FF)));
}

#[test]
fn test_from_word_invalid_memory_mode() {
    let word = WordBuilder::new().opcode(MOp::Str.raw()).mode(7).build();
    assert_eq!(Instruction::from_word(word), Err(IsaError::InvalidMemoryMode(7)));
}

#[test]
fn test_try_from_hand_built_mismatched_payload() {
    // A payload whose format disagrees with its opcode's tag cannot come from
    // `decode`, but a caller can construct one.
    let decoded = Decoded::I(IFields {
        opcode: ROp::AddReg.raw(),
        rd: Register::X1,
        rn: Register::X2,
        immediate: 3,
    });
    assert_eq!(
        Instruction::try_from(decoded),
        Err(IsaError::FormatMismatch {
            opcode: ROp::AddReg.raw(),
            expected: Format::I,
            actual: Format::R,
        })
    );
}

#[test]
fn test_try_from_decoded() {
    let word = build_r(ROp::Ret, 0, 30, 0);
    assert_eq!(
        Instruction::try_from(decode(word)),
        Ok(Instruction::r(ROp::Ret, Register::X0, Register::LR, Register::X0))
    );
}

#[test]
fn test_display_uses_disassembler() {
    let inst = Instruction::m(MOp::Ldr, Register::X9, Register::Sp, 0x1000);
    assert_eq!(inst.to_string(), "LDR x9, [sp, #0x1000]");
}

#[test]
fn test_serde_round_trip() {
    let inst = Instruction::i(IOp::Movk, Register::X4, Register::X4, 0xBEEF);
    let json = serde_json::to_string(&inst).unwrap();
    let back: Instruction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inst);
}
