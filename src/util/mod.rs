//! # Utility Modules
//!
//! Hex conversions, byte widening and frame logging helpers shared by the
//! packed field decoders and their diagnostic consumers.

pub mod bytes;
pub mod hex;
pub mod logging;

// Re-export commonly used functions
pub use bytes::{widen_byte, widen_bytes};
pub use hex::{decode_hex, decode_hex_value, encode_hex, encode_hex_values, format_hex_compact};
pub use logging::{log_frame_hex, log_frame_structured};
