//! MAX!Cube Packed Field Constants
//!
//! Masks, shifts and bounds of the packed date/time layout used in the
//! "until" fields of the gateway's `L:` device-list records.

// ----------------------------------------------------------------------------
// Packed date (16 bits)
//
//   bit  15 14 13 12 11 10 09 08 07 06 05 04 03 02 01 00
//        M3 M2 M1 D4 D3 D2 D1 D0 M0  -  -  - Y3 Y2 Y1 Y0
// ----------------------------------------------------------------------------

/// Month bits 3..1 (top three bits of the word)
pub const MAXCUBE_DATE_MASK_MONTH_HIGH: u16 = 0xE000;

/// Right shift that lands the high month bits on month bits 3..1
pub const MAXCUBE_DATE_SHIFT_MONTH_HIGH: u16 = 12;

/// Month bit 0 (adjacent to the day field)
pub const MAXCUBE_DATE_MASK_MONTH_LOW: u16 = 0x0080;

pub const MAXCUBE_DATE_SHIFT_MONTH_LOW: u16 = 7;

/// Day of month, five bits
pub const MAXCUBE_DATE_MASK_DAY: u16 = 0x1F00;

pub const MAXCUBE_DATE_SHIFT_DAY: u16 = 8;

/// Year offset from [`MAXCUBE_YEAR_BASE`], four bits
pub const MAXCUBE_DATE_MASK_YEAR: u16 = 0x000F;

pub const MAXCUBE_YEAR_BASE: u16 = 2000;

/// Last year representable by the four-bit offset
pub const MAXCUBE_YEAR_MAX: u16 = MAXCUBE_YEAR_BASE + MAXCUBE_DATE_MASK_YEAR;

pub const MAXCUBE_MONTH_MAX: u8 = 0x0F;
pub const MAXCUBE_DAY_MAX: u8 = 0x1F;

// ----------------------------------------------------------------------------
// Packed time (8 bits, half hours since midnight)
// ----------------------------------------------------------------------------

pub const MAXCUBE_MINUTES_PER_TIME_UNIT: u8 = 30;
pub const MAXCUBE_TIME_UNITS_PER_HOUR: u8 = 2;

/// Last half-hour unit of a day (23:30)
pub const MAXCUBE_TIME_UNIT_MAX: u8 = 47;

/// Packed date (2 bytes) followed by packed time (1 byte)
pub const MAXCUBE_DATE_TIME_LENGTH: usize = 3;
