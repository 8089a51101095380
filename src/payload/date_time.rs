//! # MAX!Cube Packed Date/Time Fields
//!
//! The gateway transmits the "until" instant of a temporary mode as a
//! two-byte packed date followed by a one-byte packed time.
//!
//! ## Date encoding (two bytes)
//!
//! ```text
//! Hex     Binary
//! 9D0B    1001 1101 0000 1011
//!         MMMD DDDD M--- YYYY
//!         100         0        = 1000b  = 8  = month
//!            1 1101            = 11101b = 29 = day
//!                        1011  = 1011b  = 11 = year - 2000
//! ```
//!
//! The month is split: its three high bits sit at the top of the word and its
//! low bit sits just below the day field. Bits 4-6 are unused.
//!
//! ## Time encoding (one byte)
//!
//! ```text
//! Hex     Decimal
//! 1F      31 * 0.5 hours = 15:30
//! ```
//!
//! Decoding is deliberately permissive: the bits are decoded as-is, without
//! calendar validation. Use [`DecodedTimestamp::to_naive_date_time`] when a
//! real calendar instant is required.

use crate::constants::*;
use crate::error::CodecError;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use nom::{
    combinator::map,
    number::complete::{be_u16, be_u8},
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 16-bit packed date word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedDate(pub u16);

impl PackedDate {
    pub fn month(self) -> u8 {
        let high = (self.0 & MAXCUBE_DATE_MASK_MONTH_HIGH) >> MAXCUBE_DATE_SHIFT_MONTH_HIGH;
        let low = (self.0 & MAXCUBE_DATE_MASK_MONTH_LOW) >> MAXCUBE_DATE_SHIFT_MONTH_LOW;
        (high + low) as u8
    }

    pub fn day(self) -> u8 {
        ((self.0 & MAXCUBE_DATE_MASK_DAY) >> MAXCUBE_DATE_SHIFT_DAY) as u8
    }

    pub fn year(self) -> u16 {
        (self.0 & MAXCUBE_DATE_MASK_YEAR) + MAXCUBE_YEAR_BASE
    }

    /// Pack a year/month/day triple, checking each against its bit width.
    pub fn from_fields(year: u16, month: u8, day: u8) -> Result<Self, CodecError> {
        check_field("year", year.into(), MAXCUBE_YEAR_BASE.into(), MAXCUBE_YEAR_MAX.into())?;
        check_field("month", month.into(), 0, MAXCUBE_MONTH_MAX.into())?;
        check_field("day", day.into(), 0, MAXCUBE_DAY_MAX.into())?;

        let month = u16::from(month);
        let word = ((month << MAXCUBE_DATE_SHIFT_MONTH_HIGH) & MAXCUBE_DATE_MASK_MONTH_HIGH)
            | ((month << MAXCUBE_DATE_SHIFT_MONTH_LOW) & MAXCUBE_DATE_MASK_MONTH_LOW)
            | (u16::from(day) << MAXCUBE_DATE_SHIFT_DAY)
            | (year - MAXCUBE_YEAR_BASE);

        Ok(PackedDate(word))
    }
}

/// An 8-bit packed time: half hours elapsed since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedTime(pub u8);

impl PackedTime {
    /// Whole hours. Units past 47 yield hours beyond 23.
    pub fn hour(self) -> u8 {
        self.0 / MAXCUBE_TIME_UNITS_PER_HOUR
    }

    /// 30 for odd units, 0 otherwise.
    pub fn minute(self) -> u8 {
        (self.0 % MAXCUBE_TIME_UNITS_PER_HOUR) * MAXCUBE_MINUTES_PER_TIME_UNIT
    }

    /// Whether the unit count names a time within a single day.
    pub fn is_within_day(self) -> bool {
        self.0 <= MAXCUBE_TIME_UNIT_MAX
    }

    pub fn from_hour_minute(hour: u8, minute: u8) -> Result<Self, CodecError> {
        if minute % MAXCUBE_MINUTES_PER_TIME_UNIT != 0 || minute >= 60 {
            return Err(CodecError::UnalignedTime { hour, minute });
        }
        check_field("hour", hour.into(), 0, 23)?;

        Ok(PackedTime(
            hour * MAXCUBE_TIME_UNITS_PER_HOUR + minute / MAXCUBE_MINUTES_PER_TIME_UNIT,
        ))
    }
}

/// Calendar fields decoded from a packed date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedTimestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl DecodedTimestamp {
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    pub fn from_packed(date: PackedDate, time: PackedTime) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Convert to a chrono value, rejecting anything that is not a real
    /// calendar instant (month 0, 30 February, 24:00, ...).
    pub fn to_naive_date_time(&self) -> Result<NaiveDateTime, CodecError> {
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())
            .and_then(|date| date.and_hms_opt(self.hour.into(), self.minute.into(), 0))
            .ok_or(CodecError::InvalidCalendarDate(*self))
    }
}

impl fmt::Display for DecodedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Decodes a packed date word and packed time byte.
///
/// No calendar validation is performed; out-of-range fields are returned as decoded.
pub fn decode_date_time(packed_date: u16, packed_time: u8) -> DecodedTimestamp {
    let timestamp = DecodedTimestamp::from_packed(PackedDate(packed_date), PackedTime(packed_time));

    debug!(
        "Decoded packed date 0x{:04X} time 0x{:02X} as {}",
        packed_date, packed_time, timestamp
    );

    timestamp
}

/// Encodes a timestamp back into its packed date word and packed time byte.
pub fn encode_date_time(timestamp: &DecodedTimestamp) -> Result<(u16, u8), CodecError> {
    let date = PackedDate::from_fields(timestamp.year, timestamp.month, timestamp.day)?;
    let time = PackedTime::from_hour_minute(timestamp.hour, timestamp.minute)?;

    Ok((date.0, time.0))
}

/// Parses a big-endian packed date followed by the packed time byte.
pub fn parse_date_time(input: &[u8]) -> IResult<&[u8], DecodedTimestamp> {
    map(pair(be_u16, be_u8), |(date, time)| decode_date_time(date, time))(input)
}

/// Encodes a timestamp into the three wire bytes read by [`parse_date_time`].
pub fn encode_date_time_bytes(
    timestamp: &DecodedTimestamp,
) -> Result<[u8; MAXCUBE_DATE_TIME_LENGTH], CodecError> {
    let (date, time) = encode_date_time(timestamp)?;
    let [high, low] = date.to_be_bytes();
    Ok([high, low, time])
}

fn check_field(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), CodecError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(CodecError::FieldOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_worked_example() {
        let ts = decode_date_time(0x9D0B, 0x1F);
        assert_eq!(ts, DecodedTimestamp::new(2011, 8, 29, 15, 30));
        assert_eq!(ts.to_string(), "2011-08-29 15:30");
    }

    #[test]
    fn test_month_low_bit() {
        // 0xA080: high bits 101, low bit 1 -> 1011b = 11
        assert_eq!(PackedDate(0xA080).month(), 11);
        assert_eq!(PackedDate(0x0080).month(), 1);
        assert_eq!(PackedDate(0xE080).month(), 15);
    }

    #[test]
    fn test_unused_bits_ignored() {
        assert_eq!(decode_date_time(0x9D7B, 0x1F), decode_date_time(0x9D0B, 0x1F));
    }

    #[test]
    fn test_time_boundaries() {
        assert_eq!((PackedTime(0).hour(), PackedTime(0).minute()), (0, 0));
        assert_eq!((PackedTime(47).hour(), PackedTime(47).minute()), (23, 30));
        assert_eq!((PackedTime(48).hour(), PackedTime(48).minute()), (24, 0));
        assert!(!PackedTime(48).is_within_day());
        assert_eq!((PackedTime(255).hour(), PackedTime(255).minute()), (127, 30));
    }

    #[test]
    fn test_encode_worked_example() {
        let ts = DecodedTimestamp::new(2011, 8, 29, 15, 30);
        assert_eq!(encode_date_time(&ts).unwrap(), (0x9D0B, 0x1F));
        assert_eq!(encode_date_time_bytes(&ts).unwrap(), [0x9D, 0x0B, 0x1F]);
    }

    #[test]
    fn test_encode_range_errors() {
        let err = encode_date_time(&DecodedTimestamp::new(2016, 1, 1, 0, 0)).unwrap_err();
        assert_eq!(
            err,
            CodecError::FieldOutOfRange {
                field: "year",
                value: 2016,
                min: 2000,
                max: 2015
            }
        );
        assert!(encode_date_time(&DecodedTimestamp::new(1999, 1, 1, 0, 0)).is_err());
        assert!(encode_date_time(&DecodedTimestamp::new(2010, 16, 1, 0, 0)).is_err());
        assert!(encode_date_time(&DecodedTimestamp::new(2010, 1, 32, 0, 0)).is_err());
        assert!(encode_date_time(&DecodedTimestamp::new(2010, 1, 1, 24, 0)).is_err());
        assert_eq!(
            encode_date_time(&DecodedTimestamp::new(2010, 1, 1, 12, 15)),
            Err(CodecError::UnalignedTime { hour: 12, minute: 15 })
        );
        assert!(encode_date_time(&DecodedTimestamp::new(2010, 1, 1, 12, 90)).is_err());
    }

    #[test]
    fn test_encode_accepts_zero_month_and_day() {
        let ts = DecodedTimestamp::new(2000, 0, 0, 0, 0);
        assert_eq!(encode_date_time(&ts).unwrap(), (0x0000, 0x00));
    }

    #[test]
    fn test_parse_date_time_leaves_remainder() {
        let input = [0x9D, 0x0B, 0x1F, 0xAA];
        let (rest, ts) = parse_date_time(&input).unwrap();
        assert_eq!(rest, &[0xAA]);
        assert_eq!(ts, DecodedTimestamp::new(2011, 8, 29, 15, 30));
    }

    #[test]
    fn test_parse_date_time_incomplete() {
        assert!(parse_date_time(&[0x9D, 0x0B]).is_err());
    }

    #[test]
    fn test_strict_conversion() {
        let ts = decode_date_time(0x9D0B, 0x1F);
        let naive = ts.to_naive_date_time().unwrap();
        assert_eq!(naive.to_string(), "2011-08-29 15:30:00");

        // 30 February 2011
        let feb = DecodedTimestamp::new(2011, 2, 30, 0, 0);
        assert_eq!(feb.to_naive_date_time(), Err(CodecError::InvalidCalendarDate(feb)));

        // 24:00 decodes but is not a valid time of day
        let midnight = decode_date_time(0x9D0B, 48);
        assert!(midnight.to_naive_date_time().is_err());
    }

    proptest! {
        #[test]
        fn prop_encode_decode_inverse(
            year in 2000u16..=2015,
            month in 1u8..=12,
            day in 1u8..=31,
            hour in 0u8..=23,
            half in 0u8..=1,
        ) {
            let ts = DecodedTimestamp::new(year, month, day, hour, half * 30);
            let (date, time) = encode_date_time(&ts).unwrap();
            prop_assert_eq!(decode_date_time(date, time), ts);
        }

        #[test]
        fn prop_decode_never_panics(date in any::<u16>(), time in any::<u8>()) {
            let ts = decode_date_time(date, time);
            prop_assert!(ts.month <= 15);
            prop_assert!(ts.day <= 31);
            prop_assert!((2000..=2015).contains(&ts.year));
        }
    }
}
