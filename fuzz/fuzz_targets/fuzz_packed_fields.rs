#![no_main]

use libfuzzer_sys::fuzz_target;
use maxcube_codec::{decode_date_time, encode_date_time, parse_date_time};

fuzz_target!(|data: &[u8]| {
    // Any three bytes must decode without panicking
    if let Ok((_, ts)) = parse_date_time(data) {
        let _ = ts.to_naive_date_time();

        // Fields inside the encodable ranges must survive a re-encode
        if let Ok((date, time)) = encode_date_time(&ts) {
            assert_eq!(decode_date_time(date, time), ts);
        }
    }
});
