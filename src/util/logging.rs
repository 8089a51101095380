//! # Frame Logging Utilities
//!
//! Hex dump helpers for the diagnostic paths that render raw MAX!Cube
//! frames and their decoded packed fields.
//!
//! ```rust
//! use maxcube_codec::util::logging::{log_frame_hex, span_frame_decode};
//!
//! let frame = [0x9D, 0x0B, 0x1F];
//! let _span = span_frame_decode("L");
//! log_frame_hex("Received until field", &frame);
//! ```

use crate::util::hex::format_hex_compact;

/// Maximum number of bytes rendered by [`log_frame_hex`]
pub const MAX_LOG_BYTES: usize = 64;

/// Render frame data as a bounded compact hex string.
///
/// Data longer than [`MAX_LOG_BYTES`] is cut and annotated with its total length.
pub fn frame_hex_summary(data: &[u8]) -> String {
    let display_data = &data[..data.len().min(MAX_LOG_BYTES)];
    let hex_str = format_hex_compact(display_data);

    if data.len() > MAX_LOG_BYTES {
        format!("{hex_str} ... ({} bytes total)", data.len())
    } else {
        hex_str
    }
}

/// Log frame data in hex format for debugging
pub fn log_frame_hex(prefix: &str, data: &[u8]) {
    log::debug!("{prefix}: {}", frame_hex_summary(data));
}

/// Log frame data with the record type it was taken from.
pub fn log_frame_structured(prefix: &str, data: &[u8], record_type: Option<&str>) {
    log::debug!(
        target: "maxcube::frame",
        "{}: {} bytes, type={:?}, data={}",
        prefix,
        data.len(),
        record_type,
        frame_hex_summary(data)
    );
}

/// Create a tracing span for decoding one record
#[cfg(feature = "tracing")]
pub fn span_frame_decode(record_type: &str) -> tracing::Span {
    tracing::debug_span!("frame_decode", record_type = record_type)
}

#[cfg(not(feature = "tracing"))]
pub fn span_frame_decode(_record_type: &str) {
    // No-op when tracing is disabled
}
