//! Common utilities and types shared by the codec and its checked layer.
//!
//! This module provides the building blocks every other module relies on. It includes:
//! 1. **Constants:** The fixed bit layout of the instruction word.
//! 2. **Bit Helpers:** Named truncation, extraction and sign extension.
//! 3. **Error Handling:** The error type of the validation layer.

/// Fixed-width truncation, extraction and sign extension.
pub mod bits;

/// Instruction word layout constants.
pub mod constants;

/// Error types for the checked layer.
pub mod error;

pub use bits::{sign_extend, truncate_to_width};
pub use error::{IsaError, IsaResult};
