//! Instruction Word Layout Constants.
//!
//! This module defines the fixed bit positions shared by every consumer of the
//! instruction word. It includes:
//! 1. **Word Constants:** Width and byte size of one instruction word.
//! 2. **Field Constants:** Shift, width and mask for every physical field.
//! 3. **Opcode Constants:** Format tag patterns and the operation number mask.
//!
//! ```text
//! bit 63        52 51   47 46   42 41   37 36  34 33                    0
//! +--------------+-------+-------+-------+------+------------------------+
//! |   opcode(12) | rd(5) | rn(5) | rm(5) |mode(3)|     extended(34)      |
//! +--------------+-------+-------+-------+------+------------------------+
//! ```

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 64;

/// Size of an instruction word in bytes.
pub const INSTRUCTION_SIZE: u64 = 8;

/// Bit position of the opcode field (bits 52-63).
pub const OPCODE_SHIFT: u32 = 52;
/// Width of the opcode field in bits.
pub const OPCODE_WIDTH: u32 = 12;
/// Bit mask for the opcode field once shifted down.
pub const OPCODE_MASK: u64 = 0xFFF;

/// Bit position of the destination register field (bits 47-51).
pub const RD_SHIFT: u32 = 47;
/// Bit position of the first source register field (bits 42-46).
pub const RN_SHIFT: u32 = 42;
/// Bit position of the second source register field (bits 37-41).
pub const RM_SHIFT: u32 = 37;
/// Width of every register field in bits.
pub const REG_WIDTH: u32 = 5;
/// Bit mask for a register field once shifted down.
pub const REG_MASK: u64 = 0x1F;

/// Bit position of the mode field (bits 34-36).
pub const MODE_SHIFT: u32 = 34;
/// Width of the mode field in bits.
pub const MODE_WIDTH: u32 = 3;
/// Bit mask for the mode field once shifted down.
pub const MODE_MASK: u64 = 0x7;

/// Bit position of the extended region and of every format's low payload.
pub const EXTENDED_SHIFT: u32 = 0;
/// Width of the extended region (bits 0-33).
pub const EXTENDED_WIDTH: u32 = 34;
/// Bit mask for the extended region.
pub const EXTENDED_MASK: u64 = 0x3_FFFF_FFFF;

/// Bit position of the shift-type sub-field (bits 32-33).
pub const SHIFT_TYPE_SHIFT: u32 = 32;
/// Width of the shift-type sub-field in bits.
pub const SHIFT_TYPE_WIDTH: u32 = 2;
/// Bit mask for the shift-type sub-field once shifted down.
pub const SHIFT_TYPE_MASK: u64 = 0x3;

/// Bit position of the shift-amount sub-field (bits 26-31).
pub const SHIFT_AMOUNT_SHIFT: u32 = 26;
/// Width of the shift-amount sub-field in bits.
pub const SHIFT_AMOUNT_WIDTH: u32 = 6;
/// Bit mask for the shift-amount sub-field once shifted down.
pub const SHIFT_AMOUNT_MASK: u64 = 0x3F;

/// Width of the I-type immediate (bits 0-33).
pub const IMMEDIATE_WIDTH: u32 = 34;
/// Bit mask for the I-type immediate.
pub const IMMEDIATE_MASK: u64 = 0x3_FFFF_FFFF;

/// Width of the B-type branch offset (bits 0-47).
///
/// The offset overlaps the bits the diagram assigns to `rd[0]`, `rn`, `rm`
/// and `mode`; B-type defines none of those fields.
pub const BRANCH_OFFSET_WIDTH: u32 = 48;
/// Bit mask for the B-type branch offset.
pub const BRANCH_OFFSET_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// Width of the M-type memory offset (bits 0-31).
pub const MEMORY_OFFSET_WIDTH: u32 = 32;
/// Bit mask for the M-type memory offset.
pub const MEMORY_OFFSET_MASK: u64 = 0xFFFF_FFFF;

/// Position of the format tag inside the 12-bit opcode.
pub const FORMAT_TAG_SHIFT: u32 = 10;
/// Mask selecting the two format tag bits of an opcode.
pub const TYPE_MASK: u16 = 0b1100_0000_0000;
/// Mask selecting the 10-bit operation number of an opcode.
pub const OPERATION_MASK: u16 = 0b0011_1111_1111;

/// Opcode tag pattern of register (R-type) operations.
pub const PATTERN_R_TYPE: u16 = 0b0000_0000_0000;
/// Opcode tag pattern of immediate (I-type) operations.
pub const PATTERN_I_TYPE: u16 = 0b0100_0000_0000;
/// Opcode tag pattern of branch (B-type) operations.
pub const PATTERN_B_TYPE: u16 = 0b1000_0000_0000;
/// Opcode tag pattern of memory (M-type) operations.
pub const PATTERN_M_TYPE: u16 = 0b1100_0000_0000;

/// Number of architectural general-purpose registers.
pub const NUM_REGISTERS: usize = 32;
