//! Packed UTC timestamp with local offset
//!
//! See [`crate::layout`] for the bit layout.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use core::fmt;

use crate::clock::TimeCodec;
use crate::error::{Component, TimeError, TimeResult};
use crate::layout::{
    MICROS_PER_SECOND, NANOS_PER_MICRO, OFFSET_BITS, OFFSET_MASK, field_offset_seconds,
    is_encodable_second, offset_field,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest sub-second nanosecond count that stays inside its own second
const MAX_SUBSEC_NANOS: u32 = 999_999_999;

/// UTC instant with microsecond precision and a local UTC offset in one `u64`
///
/// Comparing two values compares their UTC instants first and their offsets
/// second, so raw values can be used directly as sortable keys.
///
/// The all-zero value is the [`INVALID`](Self::INVALID) sentinel. Encoding
/// reports out-of-range input by returning it; use
/// [`try_encode`](Self::try_encode) for a typed error instead.
///
/// # Example
/// ```rust
/// use chrono::{DateTime, FixedOffset};
/// use zonestamp::prelude::*;
///
/// let paris = FixedOffset::east_opt(3600).unwrap();
/// let instant = DateTime::from_timestamp(1_234_567_890, 0).unwrap().with_timezone(&paris);
///
/// let time = EncodedTime::encode(&instant);
/// assert!(time.is_valid());
/// assert_eq!(time.offset_seconds(), 3600);
/// assert_eq!(time.to_string(), "2009-02-14T00:31:30.000000+01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EncodedTime {
    value: u64,
}

impl EncodedTime {
    /// The invalid sentinel
    pub const INVALID: Self = Self { value: 0 };

    /// Validates a raw integer received from storage or transport
    ///
    /// Only the offset field is checked: a zero field yields
    /// [`INVALID`](Self::INVALID), anything else passes through unchanged.
    pub const fn from_raw(raw: u64) -> Self {
        if raw & OFFSET_MASK == 0 {
            Self::INVALID
        } else {
            Self { value: raw }
        }
    }

    /// Returns the raw integer
    pub const fn to_raw(&self) -> u64 {
        self.value
    }

    /// Returns true unless this is the invalid sentinel
    pub const fn is_valid(&self) -> bool {
        self.value & OFFSET_MASK != 0
    }

    /// Encodes Unix seconds, sub-second nanoseconds and an offset in seconds
    ///
    /// # Arguments
    /// * `unix_seconds` - whole seconds since 1970-01-01T00:00:00Z
    /// * `nanos` - sub-second part; digits below the microsecond are dropped
    /// * `offset_seconds` - local offset east of UTC, a whole number of minutes
    ///
    /// # Returns
    /// The encoded value, or a [`TimeError::OutOfRange`] naming the first
    /// component that failed validation
    pub fn try_from_parts(unix_seconds: i64, nanos: u32, offset_seconds: i32) -> TimeResult<Self> {
        if !is_encodable_second(unix_seconds) {
            tracing::trace!(unix_seconds, "instant outside the encodable range");
            return Err(TimeError::OutOfRange(Component::Instant));
        }
        let Some(field) = offset_field(offset_seconds) else {
            tracing::trace!(offset_seconds, "offset outside the encodable range");
            return Err(TimeError::OutOfRange(Component::Offset));
        };

        // A leap second is stored as the last microsecond of its second.
        let micros = unix_seconds as u64 * MICROS_PER_SECOND
            + u64::from(nanos.min(MAX_SUBSEC_NANOS) / NANOS_PER_MICRO);

        Ok(Self {
            value: micros << OFFSET_BITS | u64::from(field),
        })
    }

    /// Same as [`try_from_parts`](Self::try_from_parts), returning
    /// [`INVALID`](Self::INVALID) on failure
    pub fn from_parts(unix_seconds: i64, nanos: u32, offset_seconds: i32) -> Self {
        Self::try_from_parts(unix_seconds, nanos, offset_seconds).unwrap_or(Self::INVALID)
    }

    /// Encodes a calendar timestamp, keeping its current UTC offset
    pub fn try_encode<Tz: TimeZone>(datetime: &DateTime<Tz>) -> TimeResult<Self> {
        Self::try_from_parts(
            datetime.timestamp(),
            datetime.timestamp_subsec_nanos(),
            datetime.offset().fix().local_minus_utc(),
        )
    }

    /// Encodes a calendar timestamp, returning [`INVALID`](Self::INVALID) if
    /// the instant predates the epoch, lies past the last encodable second, or
    /// carries an offset that is not a whole minute within ±17:03
    pub fn encode<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::try_encode(datetime).unwrap_or(Self::INVALID)
    }

    /// Encodes the host clock's current local time
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn now() -> Self {
        Self::encode(&chrono::Local::now())
    }

    /// Returns the biased offset field (`0` for the sentinel)
    pub const fn offset_field(&self) -> u16 {
        (self.value & OFFSET_MASK) as u16
    }

    /// Returns the offset east of UTC in seconds
    ///
    /// The sentinel reports `-61440`; check [`is_valid`](Self::is_valid) first.
    pub const fn offset_seconds(&self) -> i32 {
        field_offset_seconds(self.offset_field())
    }

    /// Returns a copy with a different offset and the same UTC instant
    ///
    /// # Errors
    /// [`TimeError::InvalidOffset`] if the offset is not a whole number of
    /// minutes within ±17:03.
    pub fn with_offset_seconds(self, offset_seconds: i32) -> TimeResult<Self> {
        let Some(field) = offset_field(offset_seconds) else {
            tracing::debug!(offset_seconds, "rejected offset change");
            return Err(TimeError::InvalidOffset);
        };
        Ok(Self {
            value: self.value & !OFFSET_MASK | u64::from(field),
        })
    }

    /// Replaces the offset in place, leaving `self` untouched on error
    ///
    /// # Errors
    /// [`TimeError::InvalidOffset`], as for [`with_offset_seconds`](Self::with_offset_seconds).
    pub fn set_offset_seconds(&mut self, offset_seconds: i32) -> TimeResult<()> {
        *self = self.with_offset_seconds(offset_seconds)?;
        Ok(())
    }

    /// Returns the microseconds elapsed since the Unix epoch
    pub const fn utc_micros(&self) -> u64 {
        self.value >> OFFSET_BITS
    }

    /// Returns the whole seconds elapsed since the Unix epoch
    pub const fn unix_seconds(&self) -> i64 {
        (self.utc_micros() / MICROS_PER_SECOND) as i64
    }

    /// Returns the microseconds past the whole second
    pub const fn subsec_micros(&self) -> u32 {
        (self.utc_micros() % MICROS_PER_SECOND) as u32
    }

    /// Returns the UTC instant, or `None` for the sentinel
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        DateTime::from_timestamp(self.unix_seconds(), self.subsec_micros() * NANOS_PER_MICRO)
    }

    /// Decodes through the process-wide registry, or `None` for the sentinel
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        TimeCodec::shared().to_datetime(*self)
    }
}

impl From<EncodedTime> for u64 {
    fn from(time: EncodedTime) -> Self {
        time.to_raw()
    }
}

impl<Tz: TimeZone> TryFrom<DateTime<Tz>> for EncodedTime {
    type Error = TimeError;

    fn try_from(datetime: DateTime<Tz>) -> Result<Self, Self::Error> {
        Self::try_encode(&datetime)
    }
}

impl fmt::Display for EncodedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TimeCodec::shared().format(*self))
    }
}

#[cfg(feature = "serde")]
impl Serialize for EncodedTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EncodedTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Self::from_raw)
    }
}
