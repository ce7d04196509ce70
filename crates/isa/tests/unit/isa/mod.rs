//! # ISA Unit Tests
//!
//! Covers the opcode space, format classification, the word codec, typed
//! instructions, the checked encoder and the disassembler.


/// Property tests: round trip, field isolation, format partition.
pub mod codec_properties;




/// Opcode numbering, uniqueness and lookup.
pub mod opcode_space;

/// Typed instruction encode and fallible decode.
pub mod typed;
