//! # Configuration Management
//!
//! Centralized configuration for the wire-integrity layer.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Direct instantiation with defaults
//! - Environment overrides via `from_env()` (`WAMP_WIRE_*` variables)
//!
//! ## Security Considerations
//! - UTF-8 validation of text frames is on by default; turning it off lets
//!   corrupt peer data reach the deserializer
//! - The text frame limit (16 MB) bounds memory held per connection

use crate::core::serialization::{decode_message, encode_message, SerializationFormat};
use crate::core::value::Value;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Largest identifier handed out by the ID generators (2^53).
///
/// This is the largest integer a double-precision float represents exactly,
/// so IDs survive JSON round trips through any peer.
pub const MAX_ID: u64 = 9_007_199_254_740_992;

/// Default upper bound on an assembled text frame (16 MB)
pub const DEFAULT_MAX_TEXT_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// Whether incoming text frames are UTF-8 validated by default
pub const VALIDATE_UTF8: bool = true;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WireConfig {
    /// Text frame handling
    #[serde(default)]
    pub text: TextFrameConfig,

    /// Message serialization
    #[serde(default)]
    pub serialization: SerializationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WireConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| Error::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| Error::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("WAMP_WIRE_VALIDATE_UTF8") {
            config.text.validate_utf8 = value.parse::<bool>().map_err(|_| {
                Error::ConfigError(format!("WAMP_WIRE_VALIDATE_UTF8 is not a bool: {value}"))
            })?;
        }

        if let Ok(size) = std::env::var("WAMP_WIRE_MAX_TEXT_FRAME_SIZE") {
            if let Ok(val) = size.parse::<usize>() {
                config.text.max_text_frame_size = val;
            }
        }

        if let Ok(name) = std::env::var("WAMP_WIRE_SERIALIZER") {
            config.serialization.format = SerializationFormat::from_subprotocol(&name)
                .ok_or_else(|| Error::ConfigError(format!("Unknown serializer: {name}")))?;
        }

        if let Ok(level) = std::env::var("WAMP_WIRE_LOG_LEVEL") {
            config.logging.log_level = level
                .parse::<Level>()
                .map_err(|_| Error::ConfigError(format!("Invalid log level: {level}")))?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| Error::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Validate the configuration for common misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.text.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Text frame configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextFrameConfig {
    /// Run every text fragment through the streaming UTF-8 validator
    pub validate_utf8: bool,

    /// Maximum assembled text frame size in bytes
    pub max_text_frame_size: usize,
}

impl Default for TextFrameConfig {
    fn default() -> Self {
        Self {
            validate_utf8: VALIDATE_UTF8,
            max_text_frame_size: DEFAULT_MAX_TEXT_FRAME_SIZE,
        }
    }
}

impl TextFrameConfig {
    /// Validate text frame configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_text_frame_size == 0 {
            errors.push("Max text frame size cannot be 0".to_string());
        } else if self.max_text_frame_size > 256 * 1024 * 1024 {
            errors.push(format!(
                "Max text frame size too large: {} bytes (maximum: 256 MB)",
                self.max_text_frame_size
            ));
        }

        if !self.validate_utf8 {
            errors.push(
                "WARNING: UTF-8 validation is disabled - not recommended for production"
                    .to_string(),
            );
        }

        errors
    }
}

/// Serialization configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SerializationConfig {
    /// Negotiated serializer, named by its WebSocket subprotocol
    #[serde(with = "format_serde")]
    pub format: SerializationFormat,
}

impl SerializationConfig {
    /// Decode an inbound payload with the configured serializer
    pub fn decode(&self, data: &[u8]) -> Result<Vec<Value>> {
        decode_message(data, self.format)
    }

    /// Encode an outbound message with the configured serializer
    pub fn encode(&self, message: &[Value]) -> Result<Vec<u8>> {
        encode_message(message, self.format)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("wamp-wire"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for SerializationFormat serialization/deserialization
mod format_serde {
    use crate::core::serialization::{decode_message, encode_message, SerializationFormat};
use crate::core::value::Value;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(format: &SerializationFormat, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        format.subprotocol().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SerializationFormat, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        SerializationFormat::from_subprotocol(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown serializer: {name}")))
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
