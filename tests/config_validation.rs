//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use tracing::Level;
use wamp_wire::config::{LoggingConfig, TextFrameConfig, WireConfig, DEFAULT_MAX_TEXT_FRAME_SIZE};
use wamp_wire::core::serialization::{encode_message, SerializationFormat};
use wamp_wire::transport::text_frame::TextFrameAssembler;
use wamp_wire::Value;

#[test]
fn test_default_config_validates() {
    let config = WireConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_zero_text_frame_size() {
    let mut config = WireConfig::default();
    config.text.max_text_frame_size = 0;

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be 0")));
}

#[test]
fn test_huge_text_frame_size() {
    let mut config = WireConfig::default();
    config.text.max_text_frame_size = 1024 * 1024 * 1024;

    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Max text frame size too large")));
}

#[test]
fn test_disabled_utf8_validation_warns() {
    let config = WireConfig::default_with_overrides(|c| c.text.validate_utf8 = false);
    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("UTF-8 validation is disabled")));
}

#[test]
fn test_empty_app_name() {
    let mut config = WireConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_long_app_name() {
    let config = LoggingConfig {
        app_name: "x".repeat(65),
        ..LoggingConfig::default()
    };
    assert!(config.validate().iter().any(|e| e.contains("too long")));
}

#[test]
fn test_validate_strict_joins_errors() {
    let config = WireConfig::default_with_overrides(|c| {
        c.text.max_text_frame_size = 0;
        c.logging.app_name = String::new();
    });
    let err = config.validate_strict().expect_err("should fail");
    let text = err.to_string();
    assert!(text.contains("Max text frame size cannot be 0"));
    assert!(text.contains("Application name cannot be empty"));
}

#[test]
fn test_toml_sections() {
    let config = WireConfig::from_toml(
        r#"
        [text]
        validate_utf8 = true
        max_text_frame_size = 65536

        [serialization]
        format = "wamp.2.msgpack"

        [logging]
        app_name = "edge-client"
        log_level = "debug"
        json_format = true
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.text.max_text_frame_size, 65536);
    assert_eq!(config.serialization.format, SerializationFormat::MessagePack);
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
}

#[test]
fn test_configured_serializer_drives_codec() {
    let config = WireConfig::from_toml("[serialization]\nformat = \"wamp.2.msgpack\"\n")
        .expect("valid TOML");
    let msg = vec![Value::from(36), Value::from(1), Value::from(2), Value::Map(Default::default())];

    let bytes = config.serialization.encode(&msg).expect("encode");
    assert_eq!(bytes, encode_message(&msg, SerializationFormat::MessagePack).expect("encode"));
    assert_eq!(config.serialization.decode(&bytes).expect("decode"), msg);

    // JSON is the default and refuses the binary payload
    assert!(WireConfig::default().serialization.decode(&bytes).is_err());
}

#[test]
fn test_unknown_serializer_rejected() {
    let result = WireConfig::from_toml("[serialization]\nformat = \"wamp.2.ubjson\"\n");
    assert!(result.is_err());
}

#[test]
fn test_bad_log_level_rejected() {
    let result = WireConfig::from_toml(
        "[logging]\napp_name = \"a\"\nlog_level = \"loud\"\njson_format = false\n",
    );
    assert!(result.is_err());
}

#[test]
fn test_example_config_parses_back() {
    let example = WireConfig::example_config();
    let parsed = WireConfig::from_toml(&example).expect("example config must parse");
    assert_eq!(parsed.text.max_text_frame_size, DEFAULT_MAX_TEXT_FRAME_SIZE);
    assert!(parsed.text.validate_utf8);
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("wire.toml");

    let config = WireConfig::default_with_overrides(|c| c.text.max_text_frame_size = 2048);
    config.save_to_file(&path).expect("save");

    let loaded = WireConfig::from_file(&path).expect("load");
    assert_eq!(loaded.text.max_text_frame_size, 2048);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = WireConfig::from_file("/nonexistent/wamp-wire.toml").expect_err("missing file");
    assert!(err.to_string().contains("Failed to open config file"));
}

#[test]
fn test_assembler_honours_limit_from_config() {
    let config = TextFrameConfig {
        validate_utf8: true,
        max_text_frame_size: 8,
    };
    let mut frames = TextFrameAssembler::new(&config);
    assert!(frames.push_fragment(b"12345678").is_ok());
    assert!(frames.push_fragment(b"9").is_err());
}
