//! # Codec Error Handling
//!
//! This module defines the CodecError enum, which represents the different error
//! types that can occur in the maxcube-codec crate.

use crate::payload::date_time::DecodedTimestamp;
use thiserror::Error;

/// Broad classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed textual input.
    Format,
    /// Numeric input outside the declared domain.
    Range,
    /// Decoded fields that do not name a real calendar instant.
    Calendar,
}

/// Represents the different error types that can occur in the codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Indicates an empty hexadecimal string was provided.
    #[error("Empty hex string")]
    EmptyHex,

    /// Indicates a character outside `[0-9a-fA-F]`.
    #[error("Invalid hex character: {0:?}")]
    InvalidHexCharacter(char),

    /// Indicates a byte-oriented hex string with an odd number of digits.
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    /// Indicates a hex number that does not fit the gateway's 32-bit fields.
    #[error("Hex value too large for 32 bits: {0}")]
    HexOverflow(String),

    /// Indicates a value that cannot be rendered as a single byte.
    #[error("Byte value out of range: {0} (expected 0-255)")]
    ByteOutOfRange(i64),

    /// Indicates a timestamp field that does not fit its packed bit width.
    #[error("Invalid {field}: {value} (expected {min}-{max})")]
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Indicates a time of day that is not a whole number of half hours.
    #[error("Time {hour:02}:{minute:02} is not on a half-hour boundary")]
    UnalignedTime { hour: u8, minute: u8 },

    /// Indicates decoded fields that do not form a real date and time.
    #[error("Not a valid calendar date/time: {0}")]
    InvalidCalendarDate(DecodedTimestamp),
}

impl CodecError {
    /// Returns the broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::EmptyHex
            | CodecError::InvalidHexCharacter(_)
            | CodecError::OddLength(_)
            | CodecError::HexOverflow(_) => ErrorKind::Format,
            CodecError::ByteOutOfRange(_)
            | CodecError::FieldOutOfRange { .. }
            | CodecError::UnalignedTime { .. } => ErrorKind::Range,
            CodecError::InvalidCalendarDate(_) => ErrorKind::Calendar,
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}
