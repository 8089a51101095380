#![no_main]

use libfuzzer_sys::fuzz_target;
use maxcube_codec::{decode_hex, decode_hex_value, encode_hex};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_hex_value(text);
        if let Ok(bytes) = decode_hex(text) {
            assert_eq!(decode_hex(&encode_hex(&bytes)).unwrap(), bytes);
        }
    }
});
