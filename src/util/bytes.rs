//! # Byte Widening
//!
//! Frames arriving from platforms with signed bytes carry values in
//! `-128..=127`; the packed fields are defined over the unsigned bit pattern.
//!
//! ```rust
//! use maxcube_codec::util::bytes::widen_byte;
//!
//! assert_eq!(widen_byte(-1), 0xFF);
//! assert_eq!(widen_byte(127), 0x7F);
//! ```

/// Reinterpret a signed byte as its unsigned bit pattern.
///
/// `s` for `s >= 0`, `s + 256` otherwise.
#[inline]
pub fn widen_byte(value: i8) -> u8 {
    value as u8
}

/// Widen every byte of a signed buffer.
pub fn widen_bytes(data: &[i8]) -> Vec<u8> {
    data.iter().map(|&b| widen_byte(b)).collect()
}
