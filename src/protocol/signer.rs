//! Boundary to the typed-data (EIP-712 style) signing service.
//!
//! Signing and recovery are performed by an external implementation; this
//! module fixes the contract and the fixed-size byte types that cross it.
//! Both operations are asynchronous so an implementation may hop to a
//! blocking pool or a remote signer without stalling the session.

use crate::core::value::Value;
use crate::error::{Error, Result};
use crate::utils::hex::{to_binary, to_hex_string};
use futures::future::BoxFuture;
use std::fmt;

/// Length of a recoverable secp256k1 signature (r || s || v)
pub const SIGNATURE_LEN: usize = 65;

/// Length of an account address
pub const ADDRESS_LEN: usize = 20;

/// Length of a private signing key
pub const SIGNING_KEY_LEN: usize = 32;

fn strip_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

fn decode_fixed<const N: usize>(what: &'static str, text: &str) -> Result<[u8; N]> {
    let bytes = to_binary(strip_prefix(text))?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| Error::InvalidLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}

fn from_slice<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| Error::InvalidLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}

/// A 65-byte recoverable signature
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub fn new(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        from_slice("signature", bytes).map(Self)
    }

    /// Parse hex text, with or without a `0x` prefix
    pub fn from_hex(text: &str) -> Result<Self> {
        decode_fixed("signature", text).map(Self)
    }

    /// `0x`-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        format!("0x{}", to_hex_string(&self.0))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Recovery id byte
    pub fn v(&self) -> u8 {
        self.0[SIGNATURE_LEN - 1]
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signature").field(&self.to_hex()).finish()
    }
}

/// A 20-byte account address
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        from_slice("address", bytes).map(Self)
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        decode_fixed("address", text).map(Self)
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", to_hex_string(&self.0))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A 32-byte private key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey([u8; SIGNING_KEY_LEN]);

impl SigningKey {
    pub fn new(bytes: [u8; SIGNING_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(text: &str) -> Result<Self> {
        decode_fixed("signing key", text).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNING_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

/// Typed-data signing service.
///
/// `payload` is the typed-data document as a [`Value`] map. Implementations
/// report their own failures as [`Error::Signing`].
pub trait TypedDataSigner: Send + Sync {
    /// Sign `payload` with `key`
    fn sign<'a>(&'a self, payload: &'a Value, key: &'a SigningKey)
        -> BoxFuture<'a, Result<Signature>>;

    /// Recover the address that produced `signature` over `payload`
    fn recover<'a>(
        &'a self,
        payload: &'a Value,
        signature: &'a Signature,
    ) -> BoxFuture<'a, Result<Address>>;
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_signature_hex_prefix_optional() {
        let hex = "ab".repeat(SIGNATURE_LEN);
        let a = Signature::from_hex(&hex).unwrap();
        let b = Signature::from_hex(&format!("0x{hex}")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), format!("0x{hex}"));
        assert_eq!(a.v(), 0xAB);
    }

    #[test]
    fn test_wrong_length_reports_sizes() {
        match Address::from_hex("0x0102") {
            Err(Error::InvalidLength {
                what,
                expected,
                actual,
            }) => {
                assert_eq!(what, "address");
                assert_eq!(expected, ADDRESS_LEN);
                assert_eq!(actual, 2);
            }
            other => panic!("expected InvalidLength, got {other:?}"),
        }
    }

    #[test]
    fn test_odd_hex_is_invariant() {
        assert!(matches!(Address::from_hex("0x123"), Err(Error::Invariant(_))));
    }

    #[test]
    fn test_signing_key_debug_redacted() {
        let key = SigningKey::new([7u8; SIGNING_KEY_LEN]);
        let shown = format!("{key:?}");
        assert!(!shown.contains('7'));
    }
}
