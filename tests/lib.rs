//! Common utilities and shared code for property-based testing of the codec
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Generators for in-range and out-of-range timestamp components
//! - Helper functions for building calendar timestamps

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use chrono::{DateTime, FixedOffset};
use proptest::prelude::*;
use zonestamp::layout::{MAX_OFFSET_SECONDS, MAX_UTC_SECONDS, MIN_OFFSET_SECONDS};
use zonestamp::prelude::*;

/// Standard proptest configuration for codec property tests
pub fn codec_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    }
}

/// Proptest configuration for tests that spawn threads (fewer cases)
pub fn concurrent_config() -> ProptestConfig {
    ProptestConfig {
        cases: 16,
        max_shrink_iters: 20,
        ..ProptestConfig::default()
    }
}

/// Generate encodable Unix seconds
pub fn seconds_strategy() -> impl Strategy<Value = i64> {
    0i64..=MAX_UTC_SECONDS
}

/// Generate sub-second nanoseconds, excluding leap seconds
pub fn nanos_strategy() -> impl Strategy<Value = u32> {
    0u32..1_000_000_000
}

/// Generate valid offsets: whole minutes within ±17:03
pub fn offset_strategy() -> impl Strategy<Value = i32> {
    (MIN_OFFSET_SECONDS / 60..=MAX_OFFSET_SECONDS / 60).prop_map(|minutes| minutes * 60)
}

/// Generate offsets that are not whole minutes
pub fn fractional_offset_strategy() -> impl Strategy<Value = i32> {
    (-86_399i32..86_400).prop_filter("whole minute", |seconds| seconds % 60 != 0)
}

/// Generate whole-minute offsets beyond ±17:03 that chrono still accepts
pub fn wide_offset_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![
        (MAX_OFFSET_SECONDS / 60 + 1..1440).prop_map(|minutes| minutes * 60),
        (-1439..MIN_OFFSET_SECONDS / 60).prop_map(|minutes| minutes * 60),
    ]
}

/// Generate valid raw offset fields
pub fn field_strategy() -> impl Strategy<Value = u16> {
    1u16..=2047
}

/// Generate valid encoded values
pub fn encoded_strategy() -> impl Strategy<Value = EncodedTime> {
    (seconds_strategy(), nanos_strategy(), offset_strategy())
        .prop_map(|(seconds, nanos, offset)| EncodedTime::from_parts(seconds, nanos, offset))
}

/// Build a calendar timestamp at the given instant and offset
pub fn datetime_at(unix_seconds: i64, nanos: u32, offset_seconds: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(offset_seconds).expect("offset within a day");
    DateTime::from_timestamp(unix_seconds, nanos)
        .expect("instant within chrono range")
        .with_timezone(&offset)
}

/// Truncate nanoseconds to whole microseconds
pub fn truncate_to_micros(nanos: u32) -> u32 {
    nanos / 1_000 * 1_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_at() {
        let datetime = datetime_at(1_234_567_890, 0, 3600);
        assert_eq!(datetime.timestamp(), 1_234_567_890);
        assert_eq!(datetime.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_truncate_to_micros() {
        assert_eq!(truncate_to_micros(123_456_789), 123_456_000);
        assert_eq!(truncate_to_micros(999), 0);
    }
}
