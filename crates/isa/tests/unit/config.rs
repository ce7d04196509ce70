//! # Configuration Tests
//!
//! Verifies defaults and JSON parsing of the codec configuration.

use pretty_assertions::assert_eq;
use w64_isa::CodecConfig;
use w64_isa::IsaError;
use w64_isa::config::OperandPolicy;

#[test]
fn test_default_config() {
    let config = CodecConfig::default();
    assert_eq!(config.operand_policy, OperandPolicy::Truncate);
    assert!(config.sign_extend_immediates);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = CodecConfig::from_json("{}").unwrap();
    assert_eq!(config, CodecConfig::default());
}

#[test]
fn test_json_reject_policy() {
    let config = CodecConfig::from_json(r#"{ "operand_policy": "reject" }"#).unwrap();
    assert_eq!(config.operand_policy, OperandPolicy::Reject);
    assert!(config.sign_extend_immediates);
}

#[test]
fn test_json_full() {
    let config = CodecConfig::from_json(
        r#"{ "operand_policy": "truncate", "sign_extend_immediates": false }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        CodecConfig {
            operand_policy: OperandPolicy::Truncate,
            sign_extend_immediates: false,
        }
    );
}

#[test]
fn test_json_unknown_policy_is_config_error() {
    let err = CodecConfig::from_json(r#"{ "operand_policy": "saturate" }"#).unwrap_err();
    assert!(matches!(err, IsaError::Config(_)));
}

#[test]
fn test_json_unknown_field_is_config_error() {
    let err = CodecConfig::from_json(r#"{ "mode_bits": 3 }"#).unwrap_err();
    assert!(matches!(err, IsaError::Config(_)));
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = CodecConfig::from_json("{ operand_policy").unwrap_err();
    assert!(matches!(err, IsaError::Config(_)));
}

#[test]
fn test_config_serializes_lowercase_policy() {
    let text = serde_json::to_string(&CodecConfig::default()).unwrap();
    assert!(text.contains(r#""operand_policy":"truncate""#));
}
