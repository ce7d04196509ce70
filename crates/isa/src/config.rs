//! Codec configuration.
//!
//! This module defines the knobs of the checked layer and the disassembler. It provides:
//! 1. **Defaults:** The settings used when a field is absent.
//! 2. **Structures:** [`CodecConfig`], deserializable from JSON.
//! 3. **Enums:** [`OperandPolicy`], selecting truncation or rejection of oversized operands.
//!
//! The bit layout itself is fixed and is not configurable.

use serde::{Deserialize, Serialize};

use crate::common::error::IsaError;

/// Default configuration values.
mod defaults {
    use super::OperandPolicy;

    /// Oversized operands wrap, matching the unchecked builders.
    pub const OPERAND_POLICY: OperandPolicy = OperandPolicy::Truncate;

    /// Disassembly prints I-type immediates as signed decimals.
    pub const SIGN_EXTEND_IMMEDIATES: bool = true;

    pub const fn operand_policy() -> OperandPolicy {
        OPERAND_POLICY
    }

    pub const fn sign_extend_immediates() -> bool {
        SIGN_EXTEND_IMMEDIATES
    }
}

/// What the checked encoder does with an operand wider than its field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandPolicy {
    /// Keep the low bits, logging the truncation at `debug` level.
    #[default]
    Truncate,
    /// Return [`IsaError::OperandOutOfRange`].
    Reject,
}

/// Settings for the checked encoder and the disassembler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Handling of oversized operands in [`Encoder`](crate::isa::validate::Encoder).
    #[serde(default = "defaults::operand_policy")]
    pub operand_policy: OperandPolicy,
    /// Whether the disassembler shows I-type immediates sign extended from 34 bits.
    #[serde(default = "defaults::sign_extend_immediates")]
    pub sign_extend_immediates: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            operand_policy: defaults::OPERAND_POLICY,
            sign_extend_immediates: defaults::SIGN_EXTEND_IMMEDIATES,
        }
    }
}

impl CodecConfig {
    /// Parses a configuration from JSON. Absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`IsaError::Config`] if the text is not valid JSON or names an unknown
    /// field or policy.
    pub fn from_json(text: &str) -> Result<Self, IsaError> {
        serde_json::from_str(text).map_err(|e| IsaError::Config(e.to_string()))
    }
}
