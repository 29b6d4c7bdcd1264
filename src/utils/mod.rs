//! # Utility Modules
//!
//! Supporting utilities shared by the protocol layers.
//!
//! ## Components
//! - **Hex**: lenient hex decoding and lowercase encoding for auth material
//! - **Logging**: structured logging configuration

pub mod hex;
pub mod logging;

pub use hex::{to_binary, to_hex_string};
