//! The payload module contains the decoders for packed fields carried in the
//! data payload of MAX!Cube gateway messages.

pub mod date_time;

pub use date_time::{
    decode_date_time, encode_date_time, encode_date_time_bytes, parse_date_time,
    DecodedTimestamp, PackedDate, PackedTime,
};
