//! # Error Types
//!
//! Error handling for the wire-integrity layer.
//!
//! Failures fall into three classes that must never be conflated:
//!
//! ## Error Categories
//! - **Protocol Errors**: the remote peer violated the wire format (bad arity,
//!   invalid UTF-8 in a text frame). The session must be aborted.
//! - **Invariant Violations**: the calling code is wrong (message routed to the
//!   wrong handler, odd-length hex input). These indicate a local bug.
//! - **Lenient coercions**: `parse_number` and `to_binary` never fail on data
//!   shape mismatches and therefore have no error variant at all.
//!
//! ## Example Usage
//! ```rust
//! use wamp_wire::error::{Error, Result};
//! use wamp_wire::protocol::message::validate_exact;
//! use wamp_wire::Value;
//! use tracing::{error, warn};
//!
//! fn check(msg: &[Value]) -> Result<()> {
//!     validate_exact(msg, 36, "EVENT", 4)
//! }
//!
//! match check(&[Value::from(36)]) {
//!     Ok(()) => {}
//!     Err(e) if e.is_protocol_violation() => warn!(error = %e, "aborting session"),
//!     Err(e) => error!(error = %e, "local bug"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants used on the error paths.
pub mod constants {
    /// Message shape errors
    pub const ERR_EMPTY_MESSAGE: &str = "Message must not be empty";
    pub const ERR_TYPE_NOT_INTEGER: &str = "Message type code must be an integer";

    /// Hex codec errors
    pub const ERR_ODD_HEX_LENGTH: &str = "Hex input must have an even number of characters";

    /// Serialization errors
    pub const ERR_NOT_AN_ARRAY: &str = "Top-level message is not an array";
}

/// A wire-format violation attributable to the remote peer.
///
/// The outer session layer is expected to answer any of these with an abort
/// and close the connection.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("Invalid message length {length} for {name}")]
    InvalidMessageLength { length: usize, name: String },

    #[error("Message is not an array")]
    NotAnArray,

    #[error("Invalid UTF-8 in text frame at position {position}")]
    InvalidUtf8 { position: usize },

    #[error("Text frame ended inside a UTF-8 sequence at position {position}")]
    TruncatedUtf8 { position: usize },

    #[error("Text frame too large: {size} bytes (limit {limit})")]
    OversizedTextFrame { size: usize, limit: usize },
}

/// Primary error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invariant violation: {0}")]
    Invariant(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid {what} length: expected {expected}, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Deserialize error: {0}")]
    Deserialize(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True when the error was caused by the remote peer rather than local code.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Error::Protocol(_))
    }

    /// The peer violation carried by this error, if any.
    pub fn as_protocol_error(&self) -> Option<&ProtocolError> {
        match self {
            Error::Protocol(e) => Some(e),
            _ => None,
        }
    }
}

/// Type alias for Results using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
