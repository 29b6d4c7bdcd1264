//! # wamp-wire
//!
//! Wire-integrity layer for WAMP clients.
//!
//! Everything a peer sends passes through here before it is interpreted:
//! text frames are checked for UTF-8 validity as fragments arrive, decoded
//! messages are checked for type code and arity before any field is read, and
//! outgoing identifiers stay inside the range doubles represent exactly.
//!
//! ## Modules
//! - [`transport`]: streaming UTF-8 validator and text frame assembler
//! - [`protocol`]: message shape validation, ID generation, signer boundary
//! - [`core`]: dynamic `Value` model and JSON / MessagePack bridge
//! - [`utils`]: hex codec, logging setup
//! - [`config`]: TOML / environment configuration
//! - [`error`]: `Error` and the peer-attributable `ProtocolError`
//!
//! ## Example
//! ```rust
//! use wamp_wire::transport::utf8::Utf8Validator;
//!
//! let mut v = Utf8Validator::new();
//! assert!(v.validate(&[0xE2, 0x82]));
//! assert!(!v.is_valid());
//! assert!(v.validate(&[0xAC]));
//! assert!(v.is_valid());
//! assert_eq!(v.position(), 3);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod utils;

pub use crate::core::value::{Dict, Value};
pub use crate::error::{Error, ProtocolError, Result};
pub use crate::protocol::id::IdGenerator;
pub use crate::transport::utf8::Utf8Validator;
