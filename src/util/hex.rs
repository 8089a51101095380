//! # Hex Encoding/Decoding Utilities
//!
//! This module provides the hex conversions used when framing packed
//! MAX!Cube messages and when rendering raw frames for troubleshooting.
//!
//! ## Features
//!
//! - Parsing of a hex number into its integer value
//! - Range-checked encoding of integer sequences (no silent truncation)
//! - Byte slice encoding/decoding using the `hex` crate
//! - Compact dumps for log lines
//!
//! ## Usage
//!
//! ```rust
//! use maxcube_codec::util::hex::{decode_hex, decode_hex_value, encode_hex, encode_hex_values};
//!
//! assert_eq!(decode_hex_value("9d0b").unwrap(), 0x9D0B);
//! assert_eq!(encode_hex_values([5, 255]).unwrap(), "05FF");
//!
//! let frame = [0x9D, 0x0B, 0x1F];
//! let hex_str = encode_hex(&frame);
//! assert_eq!(hex_str, "9D0B1F");
//! assert_eq!(decode_hex(&hex_str).unwrap(), frame);
//! ```

use crate::error::CodecError;

/// Parse a hex number (case-insensitive) into its integer value.
///
/// Only `[0-9a-fA-F]` is accepted: no sign, no `0x` prefix, no whitespace.
/// Values wider than 32 bits are rejected.
pub fn decode_hex_value(text: &str) -> Result<u32, CodecError> {
    if text.is_empty() {
        return Err(CodecError::EmptyHex);
    }

    if let Some(c) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHexCharacter(c));
    }

    u32::from_str_radix(text, 16).map_err(|_| CodecError::HexOverflow(text.to_string()))
}

/// Encode integers as concatenated two-digit uppercase hex.
///
/// Every value must lie in `0..=255`; anything else, negative values
/// included, fails with [`CodecError::ByteOutOfRange`].
pub fn encode_hex_values<I>(values: I) -> Result<String, CodecError>
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    let mut result = String::new();

    for value in values {
        let value = value.into();
        let byte = u8::try_from(value).map_err(|_| CodecError::ByteOutOfRange(value))?;
        result.push_str(&format!("{byte:02X}"));
    }

    Ok(result)
}

/// Encode bytes to an uppercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decode a hex string to bytes, two digits per byte
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is automatically stripped.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, CodecError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(CodecError::EmptyHex);
    }

    if cleaned.len() % 2 != 0 {
        return Err(CodecError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, .. } => CodecError::InvalidHexCharacter(c),
        _ => CodecError::OddLength(cleaned.len()),
    })
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "9D 0B 1F" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
