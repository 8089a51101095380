//! Packed "until" fields as they appear inside MAX!Cube `L:` records.

use maxcube_codec::util::hex::decode_hex;
use maxcube_codec::{encode_date_time_bytes, encode_hex, parse_date_time, DecodedTimestamp};
use nom::IResult;

const GOLDEN: &[(&str, (u16, u8, u8, u8, u8))] = &[
    ("9D0B1F", (2011, 8, 29, 15, 30)),
    ("D80D24", (2013, 12, 24, 18, 0)),
    ("018F01", (2015, 1, 1, 0, 30)),
    ("6F802F", (2000, 7, 15, 23, 30)),
];

#[test]
fn test_golden_decode() {
    for (hex, (year, month, day, hour, minute)) in GOLDEN {
        let data = decode_hex(hex).unwrap();
        let result: IResult<&[u8], DecodedTimestamp> = parse_date_time(&data);
        match result {
            Ok((remaining, ts)) => {
                assert!(remaining.is_empty());
                assert_eq!(ts, DecodedTimestamp::new(*year, *month, *day, *hour, *minute), "{hex}");
            }
            Err(e) => panic!("Failed to parse {hex}: {:?}", e),
        }
    }
}

#[test]
fn test_golden_encode() {
    for (hex, (year, month, day, hour, minute)) in GOLDEN {
        let ts = DecodedTimestamp::new(*year, *month, *day, *hour, *minute);
        let bytes = encode_date_time_bytes(&ts).unwrap();
        assert_eq!(encode_hex(&bytes), *hex);
    }
}

#[test]
fn test_golden_strict_calendar() {
    for (hex, _) in GOLDEN {
        let data = decode_hex(hex).unwrap();
        let (_, ts) = parse_date_time(&data).unwrap();
        assert!(ts.to_naive_date_time().is_ok(), "{hex} should be a real instant");
    }
}
