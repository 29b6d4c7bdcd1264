//! # Serialization Formats
//!
//! Adapter between raw frame payloads and [`Value`] messages for the two
//! serializers a WAMP client negotiates during the WebSocket handshake.
//!
//! ## Formats
//! - **JSON** (`wamp.2.json`): text frames, so payloads have already passed
//!   the streaming UTF-8 gate before they get here
//! - **MessagePack** (`wamp.2.msgpack`): binary frames
//!
//! ## Usage
//! ```rust
//! use wamp_wire::core::serialization::{decode_message, SerializationFormat};
//! use wamp_wire::protocol::message::validate_exact;
//!
//! let msg = decode_message(br#"[36, 5512315355, 4429313566, {}]"#, SerializationFormat::Json)?;
//! validate_exact(&msg, 36, "EVENT", 4)?;
//! # Ok::<(), wamp_wire::Error>(())
//! ```

use crate::core::value::Value;
use crate::error::{constants, Error, ProtocolError, Result};
use tracing::debug;

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    /// Human-readable JSON carried in text frames (default)
    #[default]
    Json,
    /// Compact binary MessagePack carried in binary frames
    MessagePack,
}

impl SerializationFormat {
    /// WebSocket subprotocol name announced during the opening handshake
    pub fn subprotocol(self) -> &'static str {
        match self {
            SerializationFormat::Json => "wamp.2.json",
            SerializationFormat::MessagePack => "wamp.2.msgpack",
        }
    }

    /// Detect format from a negotiated subprotocol name
    pub fn from_subprotocol(name: &str) -> Option<Self> {
        match name {
            "wamp.2.json" => Some(SerializationFormat::Json),
            "wamp.2.msgpack" => Some(SerializationFormat::MessagePack),
            _ => None,
        }
    }

    /// Whether messages travel in binary rather than text frames
    pub fn is_binary(self) -> bool {
        matches!(self, SerializationFormat::MessagePack)
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SerializationFormat::Json => "JSON",
            SerializationFormat::MessagePack => "MessagePack",
        }
    }
}

/// Decode one frame payload into a message array.
///
/// A payload that decodes to anything but an array is a peer violation.
pub fn decode_message(data: &[u8], format: SerializationFormat) -> Result<Vec<Value>> {
    let value: Value = match format {
        SerializationFormat::Json => {
            serde_json::from_slice(data).map_err(|e| Error::Deserialize(e.to_string()))?
        }
        SerializationFormat::MessagePack => {
            rmp_serde::from_slice(data).map_err(|e| Error::Deserialize(e.to_string()))?
        }
    };

    match value {
        Value::Array(items) => Ok(items),
        other => {
            debug!(
                format = format.name(),
                found = other.type_name(),
                "{}",
                constants::ERR_NOT_AN_ARRAY
            );
            Err(ProtocolError::NotAnArray.into())
        }
    }
}

/// Encode a message array into a frame payload.
pub fn encode_message(message: &[Value], format: SerializationFormat) -> Result<Vec<u8>> {
    match format {
        SerializationFormat::Json => {
            serde_json::to_vec(message).map_err(|e| Error::Serialize(e.to_string()))
        }
        SerializationFormat::MessagePack => {
            rmp_serde::to_vec(message).map_err(|e| Error::Serialize(e.to_string()))
        }
    }
}
