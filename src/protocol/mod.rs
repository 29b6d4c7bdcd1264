//! # WAMP Protocol Invariants
//!
//! Checks and generators that keep the session consistent with the wire
//! protocol: message shape validation on the way in, identifier generation on
//! the way out, and the contract for the external typed-data signer.
//!
//! ## Components
//! - **Message**: type code and arity validation, lenient numeric coercion
//! - **Id**: session-scoped sequential IDs and global-scope random IDs
//! - **Signer**: async `sign` / `recover` boundary with fixed-size byte types

pub mod id;
pub mod message;
pub mod signer;
