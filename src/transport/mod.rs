//! # Transport-Facing Gates
//!
//! Checks applied to raw frame payloads before anything is deserialized.
//!
//! The socket, the opening handshake and frame header parsing live in the
//! outer transport; this module only sees payload bytes handed over by the
//! frame reader, one call per received fragment.
//!
//! ## Components
//! - **Utf8Validator**: streaming UTF-8 automaton with sticky rejection
//! - **TextFrameAssembler**: fragment buffering with validation and a size cap

pub mod text_frame;
pub mod utf8;
