//! Fixed-width bit helpers.
//!
//! Every builder and accessor in the codec goes through these helpers, so the
//! places where an operand is narrowed to its field width are named rather than
//! hidden inside a mask expression.

use super::constants::WORD_BITS;

/// Returns a mask with the low `width` bits set.
///
/// Widths of 64 or more produce `u64::MAX`.
#[inline(always)]
pub const fn low_mask(width: u32) -> u64 {
    if width >= WORD_BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Keeps only the low `width` bits of `value`.
///
/// This is the codec's only truncation point: out-of-range operands wrap
/// modulo `2^width` instead of being rejected.
///
/// # Arguments
///
/// * `value` - The operand to narrow.
/// * `width` - The destination field width in bits.
#[inline(always)]
pub const fn truncate_to_width(value: u64, width: u32) -> u64 {
    value & low_mask(width)
}

/// Returns `true` if `value` is representable in `width` bits without loss.
#[inline(always)]
pub const fn fits_width(value: u64, width: u32) -> bool {
    value & !low_mask(width) == 0
}

/// Extracts `width` bits starting at bit `shift` of `word`.
#[inline(always)]
pub const fn extract(word: u64, shift: u32, width: u32) -> u64 {
    (word >> shift) & low_mask(width)
}

/// Truncates `value` to `width` bits and moves it to bit position `shift`.
#[inline(always)]
pub const fn place(value: u64, shift: u32, width: u32) -> u64 {
    truncate_to_width(value, width) << shift
}

/// Sign extends the low `width` bits of `value` to a 64-bit signed integer.
///
/// The codec never does this on its own; decoded immediates and offsets are
/// unsigned bit patterns and consumers call this when they need a displacement.
///
/// # Arguments
///
/// * `value` - The raw field value.
/// * `width` - The number of valid bits in `value`.
#[inline(always)]
pub const fn sign_extend(value: u64, width: u32) -> i64 {
    if width == 0 {
        return 0;
    }
    if width >= WORD_BITS {
        return value as i64;
    }
    let shift = WORD_BITS - width;
    ((value << shift) as i64) >> shift
}

/// Converts a signed displacement to its two's-complement pattern of `width` bits.
#[inline(always)]
pub const fn to_twos_complement(value: i64, width: u32) -> u64 {
    truncate_to_width(value as u64, width)
}

/// Returns `true` if the signed `value` is representable in `width` bits.
pub const fn fits_signed_width(value: i64, width: u32) -> bool {
    sign_extend(to_twos_complement(value, width), width) == value
}
