//! Bit layout of an encoded time value
//!
//! This module holds the compile-time configuration of the 64-bit encoding:
//! field widths, masks, the offset bias and the accepted ranges.
//!
//! ```text
//!  63                                              11 10         0
//! +--------------------------------------------------+------------+
//! |   microseconds since 1970-01-01T00:00:00Z (53)   | offset (11)|
//! +--------------------------------------------------+------------+
//! ```
//!
//! The offset field stores the local UTC offset in minutes plus
//! [`OFFSET_BIAS`]. A field value of zero is reserved for the invalid
//! sentinel, so `1024` means `+00:00`, `1084` means `+01:00` and `604`
//! means `-07:00`.

/// Total width of an encoded value in bits
pub const TOTAL_BITS: u32 = 64;

/// Width of the offset field in bits
pub const OFFSET_BITS: u32 = 11;

/// Width of the microseconds field in bits
pub const MICROS_BITS: u32 = TOTAL_BITS - OFFSET_BITS;

/// Mask selecting the offset field
pub const OFFSET_MASK: u64 = (1 << OFFSET_BITS) - 1;

/// Largest value the microseconds field can hold
pub const MAX_MICROS: u64 = (1 << MICROS_BITS) - 1;

/// Bias added to the offset in minutes before it is stored
pub const OFFSET_BIAS: i32 = 1024;

/// Largest accepted offset magnitude in minutes
pub const MAX_OFFSET_MINUTES: i32 = OFFSET_BIAS - 1;

/// Smallest accepted offset in seconds (`-17:03`)
pub const MIN_OFFSET_SECONDS: i32 = -MAX_OFFSET_MINUTES * 60;

/// Largest accepted offset in seconds (`+17:03`)
pub const MAX_OFFSET_SECONDS: i32 = MAX_OFFSET_MINUTES * 60;

/// Offset field value of a zero offset
pub const ZERO_OFFSET_FIELD: u16 = OFFSET_BIAS as u16;

/// Number of distinct valid offset field values (`1..=2047`)
pub const OFFSET_FIELD_COUNT: usize = OFFSET_MASK as usize;

/// Microseconds per second
pub const MICROS_PER_SECOND: u64 = 1_000_000;

/// Nanoseconds per microsecond
pub const NANOS_PER_MICRO: u32 = 1_000;

/// Smallest encodable whole second since the Unix epoch
pub const MIN_UTC_SECONDS: i64 = 0;

/// Largest encodable whole second since the Unix epoch
///
/// Any sub-second part of this second still fits in [`MAX_MICROS`].
pub const MAX_UTC_SECONDS: i64 = ((1u64 << MICROS_BITS) / MICROS_PER_SECOND) as i64 - 1;

const _: () = assert!(OFFSET_BITS + MICROS_BITS == TOTAL_BITS);
const _: () = assert!(MAX_OFFSET_MINUTES as u64 + OFFSET_BIAS as u64 == OFFSET_MASK);
const _: () = assert!(
    (MAX_UTC_SECONDS as u64 + 1) * MICROS_PER_SECOND - 1 <= MAX_MICROS,
    "the last encodable second must fit entirely in the microseconds field"
);

/// Maps an offset in seconds to its biased field value
///
/// Returns `None` unless the offset is a whole number of minutes within
/// [`MIN_OFFSET_SECONDS`]..=[`MAX_OFFSET_SECONDS`].
pub const fn offset_field(offset_seconds: i32) -> Option<u16> {
    if offset_seconds < MIN_OFFSET_SECONDS
        || offset_seconds > MAX_OFFSET_SECONDS
        || offset_seconds % 60 != 0
    {
        return None;
    }
    Some((offset_seconds / 60 + OFFSET_BIAS) as u16)
}

/// Maps a field value back to an offset in seconds
///
/// The zero field maps to `-61440`; callers decide whether that is meaningful.
pub const fn field_offset_seconds(field: u16) -> i32 {
    (field as i32 - OFFSET_BIAS) * 60
}

/// Returns true if `seconds` lies within the encodable range
pub const fn is_encodable_second(seconds: i64) -> bool {
    seconds >= MIN_UTC_SECONDS && seconds <= MAX_UTC_SECONDS
}
