//! # maxcube-codec - Packed Field Codec for MAX!Cube Gateway Telemetry
//!
//! The MAX!Cube heating gateway squeezes several values into fixed-width
//! integers on the wire. This crate decodes those packed fields into
//! structured values and provides the inverse and helper routines needed
//! when framing or logging such messages.
//!
//! ## Features
//!
//! - Decode the two-byte packed date and one-byte packed time into a [`DecodedTimestamp`]
//! - Encode a timestamp back into its packed representation, with range checks
//! - Parse the three wire bytes directly with a `nom` combinator
//! - Hex conversions (integer parsing, range-checked encoding, compact dumps)
//! - Signed-to-unsigned byte widening
//!
//! Every operation is a pure function; nothing here performs I/O or keeps state.
//!
//! ## Usage
//!
//! ```rust
//! use maxcube_codec::{decode_date_time, decode_hex_value, encode_date_time, encode_hex_values};
//!
//! let date = decode_hex_value("9D0B").unwrap() as u16;
//! let time = decode_hex_value("1F").unwrap() as u8;
//!
//! let ts = decode_date_time(date, time);
//! assert_eq!(ts.to_string(), "2011-08-29 15:30");
//!
//! let (date, time) = encode_date_time(&ts).unwrap();
//! assert_eq!(encode_hex_values([date >> 8, date & 0xFF, time.into()]).unwrap(), "9D0B1F");
//! ```

pub mod constants;
pub mod error;
pub mod logging;
pub mod payload;
pub mod util;

pub use crate::error::{CodecError, ErrorKind};
pub use crate::logging::{init_logger, log_info};

pub use payload::{
    decode_date_time, encode_date_time, encode_date_time_bytes, parse_date_time,
    DecodedTimestamp, PackedDate, PackedTime,
};
pub use util::{decode_hex, decode_hex_value, encode_hex, encode_hex_values, widen_byte, widen_bytes};
