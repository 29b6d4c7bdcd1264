//! Hex codec for authentication material.
//!
//! Challenge and signature bytes travel as hex text during authentication.
//! Decoding is deliberately lenient about digits: a character outside
//! `[0-9a-fA-F]` counts as nibble -1 and still yields a deterministic byte
//! (`"GG"` decodes to `0xEF`). Only an odd length is refused, since it means
//! the caller handed over something that was never hex-encoded bytes.

use crate::error::{constants, Error, Result};

#[inline]
fn nibble(c: char) -> i32 {
    c.to_digit(16).map_or(-1, |d| d as i32)
}

/// Decode hex text into bytes, high nibble first.
///
/// # Errors
/// [`Error::Invariant`] if `hex` has an odd number of characters.
pub fn to_binary(hex: &str) -> Result<Vec<u8>> {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(Error::Invariant(format!(
            "{} (got {})",
            constants::ERR_ODD_HEX_LENGTH,
            chars.len()
        )));
    }

    Ok(chars
        .chunks_exact(2)
        .map(|pair| ((nibble(pair[0]) << 4) + nibble(pair[1])) as u8)
        .collect())
}

/// Encode bytes as lowercase hex, two digits per byte, no prefix.
pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
