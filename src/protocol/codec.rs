//! Payload codec
//!
//! Hex framing for every payload exchanged with the rollup server.
//!
//! ## Wire Format
//! ```text
//! ┌──────┬──────────────────────────────────────────┐
//! │ 0x   │  hex digits, two per UTF-8 byte          │
//! └──────┴──────────────────────────────────────────┘
//! ```
//! The `0x` prefix is optional on input and always written on output.
//! Input digits may be in either case; output digits are lowercase.

use crate::error::Result;

/// Prefix written in front of every encoded payload
pub const HEX_PREFIX: &str = "0x";

/// Decode a hex payload into text
///
/// Fails on non-hex characters, odd length, or bytes that are not UTF-8.
pub fn decode(hex_text: &str) -> Result<String> {
    let bytes = decode_bytes(hex_text)?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode a hex payload into raw bytes
pub fn decode_bytes(hex_text: &str) -> Result<Vec<u8>> {
    let digits = strip_prefix(hex_text);
    Ok(hex::decode(digits)?)
}

/// Encode text as a `0x`-prefixed lowercase hex payload
pub fn encode(raw_text: &str) -> String {
    encode_bytes(raw_text.as_bytes())
}

/// Encode raw bytes as a `0x`-prefixed lowercase hex payload
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    out.push_str(HEX_PREFIX);
    out.push_str(&hex::encode(bytes));
    out
}

fn strip_prefix(hex_text: &str) -> &str {
    hex_text
        .strip_prefix("0x")
        .or_else(|| hex_text.strip_prefix("0X"))
        .unwrap_or(hex_text)
}
